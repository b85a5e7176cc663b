//! API utilities for frontend-backend communication
//!
//! Endpoint construction and the JSON request helpers every loader uses.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure to get a parseable answer from the backend.
///
/// Business failures (`success: false`) are not errors at this level; they
/// come back as a parsed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Get the default base URL for API requests
///
/// Built from the current window location, using port 3000 for the backend
/// server. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// URLs of the endpoints the product form talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `GET` list of all categories
    pub fn categories(&self) -> String {
        format!("{}/categories", self.base)
    }

    /// `GET` subcategories of one category
    pub fn subcategories(&self, category_name: &str) -> String {
        format!(
            "{}/categories/subcategories?categoryName={}",
            self.base,
            urlencoding::encode(category_name)
        )
    }

    /// `POST` a new product
    pub fn products(&self) -> String {
        format!("{}/products", self.base)
    }
}

/// GET `url` and parse the JSON body, whatever the HTTP status.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        log::debug!("GET {} answered HTTP {}", url, response.status());
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// POST `body` as JSON to `url` and parse the JSON answer, whatever the HTTP status.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        log::debug!("POST {} answered HTTP {}", url, response.status());
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let endpoints = ApiEndpoints::new("http://localhost:3000/api");
        assert_eq!(endpoints.categories(), "http://localhost:3000/api/categories");
        assert_eq!(endpoints.products(), "http://localhost:3000/api/products");
        assert_eq!(
            endpoints.subcategories("Dairy"),
            "http://localhost:3000/api/categories/subcategories?categoryName=Dairy"
        );
    }

    #[test]
    fn test_category_name_is_url_encoded() {
        let endpoints = ApiEndpoints::new("http://localhost:3000/api");
        assert_eq!(
            endpoints.subcategories("Fruit & Veg"),
            "http://localhost:3000/api/categories/subcategories?categoryName=Fruit%20%26%20Veg"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoints = ApiEndpoints::new("https://pantry.example/api//");
        assert_eq!(endpoints.categories(), "https://pantry.example/api/categories");
    }
}
