//! API Configuration
//!
//! Base URL resolution and the fixed request constants.

use reqwest::Url;

use crate::error::{ApiError, ApiResult};

/// Used when `NEWS_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Page size of every news list request
pub const NEWS_PAGE_SIZE: u32 = 50;

/// Result cap of every search request
pub const SEARCH_LIMIT: u32 = 20;

/// How long the broadcast modal shows its success state before closing
pub const BROADCAST_CLOSE_DELAY_MS: u32 = 1500;

/// Where the backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Config baked in by the build (`NEWS_API_URL`), falling back to the local backend
    pub fn from_build_env() -> Self {
        Self::new(option_env!("NEWS_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Validated base URL without a trailing slash, ready for `{base}{path}` joins
    pub fn normalized_base_url(&self) -> ApiResult<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {}", trimmed, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(trimmed.to_string()),
            other => Err(ApiError::Config(format!(
                "unsupported scheme {:?} in base URL {:?}",
                other, trimmed
            ))),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
