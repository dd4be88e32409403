// ============================================================================
// CONFIG - Backend address and request timeout
// ============================================================================
// Both values are fixed at compile time (see build.rs for the .env loader).
// ============================================================================

use serde::{Deserialize, Serialize};

/// Base URL used when `API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Overall request timeout used when `API_TIMEOUT_MS` is not set
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

const BUILD_API_URL: Option<&str> = option_env!("API_URL");
const BUILD_TIMEOUT_MS: Option<&str> = option_env!("API_TIMEOUT_MS");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    /// Configuration baked in by the build environment
    pub fn from_build_env() -> Self {
        let base_url = BUILD_API_URL
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let timeout_ms = BUILD_TIMEOUT_MS
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self::new(base_url, timeout_ms)
    }

    /// Join the base URL and an endpoint path with exactly one slash
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_with_single_slash() {
        let config = ApiConfig::new("https://backend.example.com/", 5_000);
        assert_eq!(
            config.url_for("/api/resorts/"),
            "https://backend.example.com/api/resorts/"
        );

        let config = ApiConfig::new("http://localhost:8000", 5_000);
        assert_eq!(config.url_for("api/place/"), "http://localhost:8000/api/place/");
    }

    #[test]
    fn build_env_falls_back_to_defaults() {
        let config = ApiConfig::from_build_env();
        assert!(!config.base_url.is_empty());
        assert!(config.timeout_ms > 0);
    }
}
