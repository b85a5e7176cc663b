use crate::shared::ApiResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `errorCode` the backend reports when a product with the same name
/// already exists in the subcategory.
pub const DUPLICATE_PRODUCT_ERROR_CODE: i64 = 2;

// ============================================================================
// Draft (form state)
// ============================================================================

/// Product being edited in the "add product" form.
///
/// Every field holds the raw control value; [`super::validate`] turns a
/// draft into a [`CreateProductRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub sub_category: String,
    /// `YYYY-MM-DD` from a date input, or a full RFC 3339 timestamp
    pub expiry_date: String,
    pub note: String,
}

impl ProductDraft {
    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub sub_category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(with = "iso_millis")]
    pub expiry_date: DateTime<Utc>,
}

/// `POST /products` answers with no data, only `success` and `errorCode`.
pub type CreateProductResponse = ApiResponse<serde_json::Value>;

/// How the backend classified a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Duplicate,
    Failed,
}

impl SubmitOutcome {
    pub fn from_response(resp: &CreateProductResponse) -> Self {
        if resp.success {
            Self::Added
        } else if resp.error_code == Some(DUPLICATE_PRODUCT_ERROR_CODE) {
            Self::Duplicate
        } else {
            Self::Failed
        }
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-17T00:00:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn request(note: Option<&str>) -> CreateProductRequest {
        CreateProductRequest {
            name: "Greek yogurt".into(),
            sub_category_name: "Yogurt".into(),
            note: note.map(str::to_string),
            expiry_date: Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_request_wire_format() {
        let value = serde_json::to_value(request(Some("keep cold"))).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Greek yogurt",
                "subCategoryName": "Yogurt",
                "note": "keep cold",
                "expiryDate": "2026-10-20T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_blank_note_is_omitted() {
        let value = serde_json::to_value(request(None)).unwrap();
        assert!(value.get("note").is_none());
    }

    #[test]
    fn test_outcome_classification() {
        let added: CreateProductResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        let duplicate: CreateProductResponse =
            serde_json::from_value(json!({ "success": false, "errorCode": 2 })).unwrap();
        let other: CreateProductResponse =
            serde_json::from_value(json!({ "success": false, "errorCode": 7 })).unwrap();
        let bare: CreateProductResponse = serde_json::from_value(json!({ "success": false })).unwrap();

        assert_eq!(SubmitOutcome::from_response(&added), SubmitOutcome::Added);
        assert_eq!(SubmitOutcome::from_response(&duplicate), SubmitOutcome::Duplicate);
        assert_eq!(SubmitOutcome::from_response(&other), SubmitOutcome::Failed);
        assert_eq!(SubmitOutcome::from_response(&bare), SubmitOutcome::Failed);
    }

    #[test]
    fn test_success_wins_over_error_code() {
        let resp: CreateProductResponse =
            serde_json::from_value(json!({ "success": true, "errorCode": 2 })).unwrap();
        assert_eq!(SubmitOutcome::from_response(&resp), SubmitOutcome::Added);
    }
}
