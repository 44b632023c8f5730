//! Client configuration.

use reqwest::Url;

use crate::fetch::FetchError;

/// Environment variable holding the catalog API base URL.
pub const API_URL_VAR: &str = "STOREFRONT_API_URL";

/// Catalog API used when [`API_URL_VAR`] is unset.
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

/// Where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalize `base_url` (trailing slashes are dropped).
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .map_err(|e| FetchError::InvalidUrl(format!("{trimmed}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{trimmed}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read the base URL from the process environment.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FetchError> {
        match lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => {
                tracing::debug!("{API_URL_VAR} not set; using {DEFAULT_API_URL}");
                Self::new(DEFAULT_API_URL)
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `products/categories`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
