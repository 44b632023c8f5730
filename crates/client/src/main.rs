//! Print a filtered, sorted product listing from the catalog API.
//!
//! Reads `STOREFRONT_API_URL`, `STOREFRONT_CATEGORIES` (comma separated),
//! `STOREFRONT_SORT` and `STOREFRONT_QUERY`.

use anyhow::Context;

use storefront_catalog::{CatalogView, Category};
use storefront_client::{CatalogClient, ClientConfig, FetchState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ClientConfig::from_env().context("invalid catalog API configuration")?;
    tracing::info!(base_url = config.base_url(), "loading catalog");

    let client = CatalogClient::new(config);
    let state = FetchState::resolve(client.load_catalog()).await;
    if let Some(err) = state.error() {
        return Err(err.clone()).context("failed to load catalog");
    }
    let catalog = state.into_data().unwrap_or_default();

    let mut view = CatalogView::new(catalog);

    if let Ok(names) = std::env::var("STOREFRONT_CATEGORIES") {
        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if !view.toggle_category_named(&Category::new(name)) {
                tracing::warn!(category = name, "unknown category ignored");
            }
        }
    }
    if let Ok(sort) = std::env::var("STOREFRONT_SORT") {
        view.select_sort(&sort);
    }
    if let Ok(query) = std::env::var("STOREFRONT_QUERY") {
        view.set_query(query);
    }

    println!("{} (sorted by {})", view.count_label(), view.sort_criterion().label());
    for product in view.displayed() {
        let category = product.category().map_or("-", Category::as_str);
        println!("{:>6}  {:>9}  {:<20}  {}", product.id, product.price.to_string(), category, product.title);
    }

    Ok(())
}
