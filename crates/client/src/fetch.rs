//! One-shot catalog fetch.
//!
//! Each call issues a single GET: no retry, no cancellation, no timeout
//! beyond the HTTP client's defaults. Callers that need to render progress
//! wrap the call in [`FetchState::resolve`].

use core::future::Future;

use serde::de::DeserializeOwned;

use storefront_catalog::{Catalog, Category, Product};
use storefront_core::ProductId;

use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("{0} Error")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Observable state of a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Loaded(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    /// Drive `fetch` to completion and capture its outcome.
    pub async fn resolve<F>(fetch: F) -> Self
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        fetch.await.into()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(value: Result<T, FetchError>) -> Self {
        match value {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => FetchState::Failed(err),
        }
    }
}

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `path` and decode the JSON body as `T`.
    ///
    /// Non-success statuses fail with [`FetchError::Status`] without looking
    /// at the body.
    pub async fn fetch_json<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);

        let resp = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "catalog request failed");
            FetchError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let data = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(%url, error = %e, "catalog response could not be decoded");
            FetchError::Decode(e.to_string())
        })?;

        tracing::debug!(%url, bytes = body.len(), "catalog response decoded");
        Ok(data)
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.fetch_json("products").await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.fetch_json("products/categories").await
    }

    /// Single product (product detail page).
    pub async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.fetch_json(&format!("products/{id}")).await
    }

    /// Products, then categories, as one ready-to-view catalog.
    pub async fn load_catalog(&self) -> Result<Catalog, FetchError> {
        let products = self.fetch_products().await?;
        let categories = self.fetch_categories().await?;

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );
        Ok(Catalog::new(products, categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_loading() {
        let state: FetchState<Vec<u8>> = FetchState::default();

        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn resolve_success_loads_data() {
        let state = FetchState::resolve(async { Ok::<_, FetchError>(vec![1, 2, 3]) }).await;

        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert_eq!(state.into_data(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn resolve_failure_clears_loading_without_data() {
        let state: FetchState<Vec<u8>> =
            FetchState::resolve(async { Err(FetchError::Status(500)) }).await;

        assert!(!state.is_loading());
        assert!(state.data().is_none());
        assert_eq!(state.error(), Some(&FetchError::Status(500)));
    }

    #[test]
    fn status_error_reads_like_http_status() {
        assert_eq!(FetchError::Status(404).to_string(), "404 Error");
    }
}
