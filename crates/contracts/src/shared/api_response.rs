use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint answers with.
///
/// `data` is present on successful reads, `errorCode` on some failed writes.
/// HTTP status is not part of the contract: a body that parses is handled
/// by its `success` flag alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_code: None,
        }
    }

    pub fn failed(error_code: Option<i64>) -> Self {
        Self {
            success: false,
            data: None,
            error_code,
        }
    }

    /// Payload of a successful response, `None` for `success: false` or a
    /// success without data.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_list_response() {
        let resp: ApiResponse<Vec<String>> =
            serde_json::from_value(json!({ "success": true, "data": ["Dairy", "Bakery"] })).unwrap();
        assert!(resp.success);
        assert_eq!(resp.into_data(), Some(vec!["Dairy".to_string(), "Bakery".to_string()]));
    }

    #[test]
    fn test_parse_failure_without_data() {
        let resp: ApiResponse<Vec<String>> =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error_code, None);
        assert_eq!(resp.into_data(), None);
    }

    #[test]
    fn test_parse_error_code() {
        let resp: ApiResponse<()> =
            serde_json::from_value(json!({ "success": false, "errorCode": 2 })).unwrap();
        assert_eq!(resp.error_code, Some(2));
    }

    #[test]
    fn test_data_ignored_when_not_successful() {
        let resp = ApiResponse {
            success: false,
            data: Some(vec![1, 2, 3]),
            error_code: None,
        };
        assert_eq!(resp.into_data(), None);
    }

    #[test]
    fn test_missing_success_is_a_parse_error() {
        let resp = serde_json::from_value::<ApiResponse<Vec<String>>>(json!({ "data": [] }));
        assert!(resp.is_err());
    }
}
