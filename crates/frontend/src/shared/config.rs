use super::api_utils::{api_base, ApiEndpoints};

/// Base URL baked in at build time, e.g. `PANTRY_API_URL=https://pantry.example/api trunk build`.
const API_URL_ENV: Option<&str> = option_env!("PANTRY_API_URL");

/// Client configuration, provided to the component tree via context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Build-time `PANTRY_API_URL` if set, otherwise the backend next to the
    /// page host (`{protocol}//{hostname}:3000/api`).
    pub fn load() -> Self {
        let config = Self::resolve(API_URL_ENV, api_base);
        log::info!("Using API base URL: {}", config.api_base_url);
        config
    }

    fn resolve(configured: Option<&str>, fallback_host: impl FnOnce() -> String) -> Self {
        let base = configured
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}/api", fallback_host()));
        Self::with_base_url(base)
    }

    pub fn with_base_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(self.api_base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        let config = AppConfig::resolve(Some("https://pantry.example/api/"), || {
            panic!("fallback must not be consulted")
        });
        assert_eq!(config.api_base_url, "https://pantry.example/api");
    }

    #[test]
    fn test_blank_configured_url_falls_back_to_host() {
        let config = AppConfig::resolve(Some("  "), || "http://127.0.0.1:3000".to_string());
        assert_eq!(config.api_base_url, "http://127.0.0.1:3000/api");

        let config = AppConfig::resolve(None, || "http://127.0.0.1:3000".to_string());
        assert_eq!(
            config.endpoints().categories(),
            "http://127.0.0.1:3000/api/categories"
        );
    }
}
