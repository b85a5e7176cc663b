//! State machine behind the "add product" form.
//!
//! Network answers are fed in as plain `Result`s and notifications go out
//! through the `notify` argument, so the whole flow runs without a browser.

use crate::shared::api_utils::ApiError;
use crate::shared::notifications::Notification;
use crate::shared::request_generation::{RequestGeneration, RequestTicket};
use chrono::{DateTime, Utc};
use contracts::domain::a001_category::{
    Category, CategoryListResponse, SubcategoryListResponse, SubcategorySet,
};
use contracts::domain::a002_product::{
    validate, CreateProductRequest, CreateProductResponse, FieldErrors, ProductDraft, ProductField,
    SubmitOutcome, ValidationContext,
};

pub const ADD_SUCCESS_TAG: &str = "addproduct-add-success";
pub const ADD_FAIL_TAG: &str = "addproduct-add-fail";

/// Subcategory fetch to start after a category change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryRequest {
    pub ticket: RequestTicket,
    pub category: Category,
}

#[derive(Debug, Clone, Default)]
pub struct AddProductState {
    pub draft: ProductDraft,
    pub categories: Vec<Category>,
    /// Last subcategory list received; may belong to a previous category.
    pub subcategories: Option<SubcategorySet>,
    pub errors: FieldErrors,
    pub submitting: bool,
    /// Errors are recomputed on every edit once the user tried to submit.
    submitted_once: bool,
    subcategory_generation: RequestGeneration,
}

impl AddProductState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_value(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.draft.name,
            ProductField::Category => &self.draft.category,
            ProductField::SubCategory => &self.draft.sub_category,
            ProductField::ExpiryDate => &self.draft.expiry_date,
            ProductField::Note => &self.draft.note,
        }
    }

    /// Stores a control value. A category change returns the subcategory
    /// fetch to run, if any.
    pub fn set_field(&mut self, field: ProductField, value: String) -> Option<SubcategoryRequest> {
        match field {
            ProductField::Category => return self.select_category(value),
            ProductField::Name => self.draft.name = value,
            ProductField::SubCategory => self.draft.sub_category = value,
            ProductField::ExpiryDate => self.draft.expiry_date = value,
            ProductField::Note => self.draft.note = value,
        }
        None
    }

    /// Category changed: the subcategory choice is dropped and any fetch in
    /// flight goes stale. An empty category keeps the last list (hidden)
    /// and fetches nothing.
    pub fn select_category(&mut self, value: String) -> Option<SubcategoryRequest> {
        if value == self.draft.category {
            return None;
        }
        self.draft.category = value;
        self.draft.sub_category.clear();

        let ticket = self.subcategory_generation.advance();
        if self.draft.category.is_empty() {
            return None;
        }
        Some(SubcategoryRequest {
            ticket,
            category: Category::new(self.draft.category.clone()),
        })
    }

    pub fn subcategory_visible(&self) -> bool {
        self.draft.has_category()
    }

    pub fn category_options(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name().to_string()).collect()
    }

    /// Options of the dependent dropdown: whatever list arrived last, until
    /// the one for the new category replaces it.
    pub fn subcategory_options(&self) -> Vec<String> {
        if !self.subcategory_visible() {
            return Vec::new();
        }
        self.subcategories
            .as_ref()
            .map(|set| set.items.iter().map(|s| s.name().to_string()).collect())
            .unwrap_or_default()
    }

    pub fn apply_categories(
        &mut self,
        result: Result<CategoryListResponse, ApiError>,
        mut notify: impl FnMut(Notification),
    ) {
        match result {
            Ok(resp) => match resp.into_data() {
                Some(categories) => {
                    log::debug!("Loaded {} categories", categories.len());
                    self.categories = categories;
                }
                None => {
                    log::warn!("Category list request was not successful");
                    notify(Notification::transient_error());
                }
            },
            Err(e) => {
                log::warn!("Category list request failed: {}", e);
                notify(Notification::transient_error());
            }
        }
    }

    /// Applies a subcategory answer unless a newer category change happened
    /// since `request` was issued. Returns whether the list was replaced.
    pub fn apply_subcategories(
        &mut self,
        request: &SubcategoryRequest,
        result: Result<SubcategoryListResponse, ApiError>,
        mut notify: impl FnMut(Notification),
    ) -> bool {
        if !self.subcategory_generation.is_current(request.ticket) {
            log::debug!("Discarding stale subcategories of {}", request.category);
            return false;
        }
        match result {
            Ok(resp) => match resp.into_data() {
                Some(items) => {
                    log::debug!("Loaded {} subcategories of {}", items.len(), request.category);
                    let set = SubcategorySet::new(request.category.clone(), items);
                    // A pick from the previous list may not exist in this one.
                    if !self.draft.sub_category.is_empty() && !set.contains(&self.draft.sub_category) {
                        self.draft.sub_category.clear();
                    }
                    self.subcategories = Some(set);
                    true
                }
                None => {
                    log::warn!("Subcategory request for {} was not successful", request.category);
                    notify(Notification::transient_error());
                    false
                }
            },
            Err(e) => {
                log::warn!("Subcategory request for {} failed: {}", request.category, e);
                notify(Notification::transient_error());
                false
            }
        }
    }

    fn validation_context(&self, now: DateTime<Utc>) -> ValidationContext<'_> {
        ValidationContext {
            categories: &self.categories,
            subcategories: self.subcategories.as_ref(),
            now,
        }
    }

    /// Refreshes field errors after an edit, once a submit was attempted.
    pub fn revalidate(&mut self, now: DateTime<Utc>) {
        if !self.submitted_once {
            return;
        }
        self.errors = match validate(&self.draft, &self.validation_context(now)) {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors,
        };
    }

    /// Validates the draft and returns the payload to post. `None` when a
    /// field is invalid or a submission is already in flight.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<CreateProductRequest> {
        if self.submitting {
            return None;
        }
        self.submitted_once = true;
        match validate(&self.draft, &self.validation_context(now)) {
            Ok(request) => {
                self.errors = FieldErrors::new();
                self.submitting = true;
                Some(request)
            }
            Err(errors) => {
                log::debug!("Product form has {} invalid fields", errors.len());
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        result: Result<CreateProductResponse, ApiError>,
        mut notify: impl FnMut(Notification),
    ) -> Option<SubmitOutcome> {
        self.submitting = false;
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("Create product request failed: {}", e);
                notify(Notification::transient_error());
                return None;
            }
        };

        let outcome = SubmitOutcome::from_response(&resp);
        match outcome {
            SubmitOutcome::Added => {
                self.reset();
                notify(Notification::success("Product was added").with_tag(ADD_SUCCESS_TAG));
            }
            SubmitOutcome::Duplicate => {
                notify(Notification::error("Product already exists").with_tag(ADD_FAIL_TAG));
            }
            SubmitOutcome::Failed => {
                log::warn!("Create product rejected, errorCode {:?}", resp.error_code);
                notify(Notification::error("Something went wrong").with_tag(ADD_FAIL_TAG));
            }
        }
        Some(outcome)
    }

    /// Back to an empty form. Reference data stays loaded.
    fn reset(&mut self) {
        self.select_category(String::new());
        self.draft = ProductDraft::default();
        self.errors = FieldErrors::new();
        self.submitted_once = false;
    }
}
