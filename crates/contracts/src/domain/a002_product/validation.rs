//! Field rules for the "add product" form.
//!
//! Validation is a pure function of the draft, the reference data loaded so
//! far and the current time. It reports every failing field at once, at most
//! one error per field (the first rule that fails).

use super::aggregate::{CreateProductRequest, ProductDraft};
use crate::domain::a001_category::{Category, SubcategorySet};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

pub const NAME_MAX_LEN: usize = 90;
pub const NOTE_MAX_LEN: usize = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Name,
    Category,
    SubCategory,
    ExpiryDate,
    Note,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Name,
        ProductField::Category,
        ProductField::SubCategory,
        ProductField::ExpiryDate,
        ProductField::Note,
    ];
}

/// A failed field rule. `Display` is the message shown under the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name is too long")]
    NameTooLong,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Unknown category")]
    UnknownCategory,
    #[error("Subcategory is required")]
    SubCategoryRequired,
    #[error("Unknown subcategory")]
    UnknownSubCategory,
    #[error("Expiry date is required")]
    ExpiryDateRequired,
    #[error("Expiry date is invalid")]
    ExpiryDateInvalid,
    #[error("Expiry date must be in the future")]
    ExpiryDateNotInFuture,
    #[error("Note is too long")]
    NoteTooLong,
}

impl FieldError {
    pub fn field(self) -> ProductField {
        match self {
            Self::NameRequired | Self::NameTooLong => ProductField::Name,
            Self::CategoryRequired | Self::UnknownCategory => ProductField::Category,
            Self::SubCategoryRequired | Self::UnknownSubCategory => ProductField::SubCategory,
            Self::ExpiryDateRequired | Self::ExpiryDateInvalid | Self::ExpiryDateNotInFuture => {
                ProductField::ExpiryDate
            }
            Self::NoteTooLong => ProductField::Note,
        }
    }
}

/// Errors keyed by field, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ProductField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` unless its field already failed.
    pub fn insert(&mut self, error: FieldError) {
        self.0.entry(error.field()).or_insert(error);
    }

    pub fn get(&self, field: ProductField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: ProductField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn has(&self, field: ProductField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.0.values().copied()
    }
}

/// Reference data and clock the rules are checked against.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub categories: &'a [Category],
    /// Last subcategory set loaded, whichever category it belongs to.
    pub subcategories: Option<&'a SubcategorySet>,
    pub now: DateTime<Utc>,
}

/// Parses the expiry date control value.
///
/// A bare `YYYY-MM-DD` (what `<input type="date">` yields) means midnight UTC
/// of that day; anything else must be RFC 3339.
pub fn parse_expiry_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Checks a single field, returning the first failing rule.
pub fn validate_field(
    field: ProductField,
    draft: &ProductDraft,
    ctx: &ValidationContext<'_>,
) -> Option<FieldError> {
    match field {
        ProductField::Name => {
            let name = draft.name.trim();
            if name.is_empty() {
                Some(FieldError::NameRequired)
            } else if name.chars().count() > NAME_MAX_LEN {
                Some(FieldError::NameTooLong)
            } else {
                None
            }
        }
        ProductField::Category => {
            if draft.category.is_empty() {
                Some(FieldError::CategoryRequired)
            } else if !ctx.categories.iter().any(|c| c.name() == draft.category) {
                Some(FieldError::UnknownCategory)
            } else {
                None
            }
        }
        ProductField::SubCategory => {
            // Only asked for once a category has been picked.
            if !draft.has_category() {
                return None;
            }
            if draft.sub_category.is_empty() {
                return Some(FieldError::SubCategoryRequired);
            }
            let known = ctx
                .subcategories
                .filter(|set| set.belongs_to(&draft.category))
                .is_some_and(|set| set.contains(&draft.sub_category));
            if known {
                None
            } else {
                Some(FieldError::UnknownSubCategory)
            }
        }
        ProductField::ExpiryDate => {
            if draft.expiry_date.trim().is_empty() {
                return Some(FieldError::ExpiryDateRequired);
            }
            match parse_expiry_date(&draft.expiry_date) {
                None => Some(FieldError::ExpiryDateInvalid),
                Some(date) if date <= ctx.now => Some(FieldError::ExpiryDateNotInFuture),
                Some(_) => None,
            }
        }
        ProductField::Note => {
            if draft.note.trim().chars().count() > NOTE_MAX_LEN {
                Some(FieldError::NoteTooLong)
            } else {
                None
            }
        }
    }
}

/// Validates the whole draft and builds the create payload.
pub fn validate(
    draft: &ProductDraft,
    ctx: &ValidationContext<'_>,
) -> Result<CreateProductRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in ProductField::ALL {
        if let Some(error) = validate_field(field, draft, ctx) {
            errors.insert(error);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let expiry_date = parse_expiry_date(&draft.expiry_date).ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.insert(FieldError::ExpiryDateInvalid);
        errors
    })?;
    let note = draft.note.trim();

    Ok(CreateProductRequest {
        name: draft.name.trim().to_string(),
        sub_category_name: draft.sub_category.clone(),
        note: if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        },
        expiry_date,
    })
}
