//! Catalog domain module.
//!
//! Product model, category filtering, sorting and cart state for the
//! storefront, implemented as deterministic in-memory logic (no IO, no
//! rendering, no storage).

pub mod cart;
pub mod filter;
pub mod product;
pub mod sort;
pub mod view;

pub use cart::{BADGE_MAX, Cart, CartLine};
pub use filter::{CategoryFilter, filter_by_categories, filter_by_title};
pub use product::{Catalog, Category, Price, Product, Rating};
pub use sort::{SortCriterion, sort_products};
pub use view::CatalogView;

pub use storefront_core::ProductId;
