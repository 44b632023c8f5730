//! `storefront-client`
//!
//! **Responsibility:** load the catalog from the storefront API.
//!
//! This crate provides:
//! - Client configuration (`STOREFRONT_API_URL`)
//! - One-shot JSON fetches of products and categories
//! - A three-state [`FetchState`] for loading/loaded/failed views

pub mod config;
pub mod fetch;

pub use config::ClientConfig;
pub use fetch::{CatalogClient, FetchError, FetchState};
