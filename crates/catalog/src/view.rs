//! Product listing state: the filter/sort pipeline behind the products page.

use crate::filter::{CategoryFilter, filter_by_categories, filter_by_title};
use crate::product::{Catalog, Category, Product};
use crate::sort::{SortCriterion, sort_products};

/// Owned state of one product listing.
///
/// The catalog is fixed for the lifetime of the view; the filter, sort
/// criterion and search query change only through the methods below. Every
/// read of [`CatalogView::displayed`] recomputes the pipeline from scratch,
/// so it always reflects the latest state.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    catalog: Catalog,
    filter: CategoryFilter,
    sort: SortCriterion,
    query: String,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        let filter = CategoryFilter::new(catalog.categories());
        Self {
            catalog,
            filter,
            sort: SortCriterion::Default,
            query: String::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn sort_criterion(&self) -> SortCriterion {
        self.sort
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Swap in a freshly loaded catalog. Flags of categories that still exist
    /// are kept.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.filter = self.filter.rebuild(catalog.categories());
        self.catalog = catalog;
        tracing::debug!(
            products = self.catalog.products().len(),
            categories = self.filter.len(),
            "catalog replaced"
        );
    }

    pub fn toggle_category(&mut self, index: usize) -> bool {
        self.filter.toggle(index)
    }

    pub fn toggle_category_named(&mut self, category: &Category) -> bool {
        self.filter.toggle_category(category)
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn set_sort(&mut self, criterion: SortCriterion) {
        tracing::debug!(criterion = %criterion, "sort criterion changed");
        self.sort = criterion;
    }

    /// Apply a raw sort-select value; unknown values select the default order.
    pub fn select_sort(&mut self, value: &str) {
        self.set_sort(SortCriterion::from_selection(value));
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Filtered, searched and sorted products, ready for rendering.
    pub fn displayed(&self) -> Vec<&Product> {
        let active = self.filter.active_categories();
        let by_category = filter_by_categories(self.catalog.products(), &active);
        let matching = filter_by_title(by_category, &self.query);
        let sorted = sort_products(&matching, self.sort);

        tracing::debug!(
            total = self.catalog.products().len(),
            active_categories = active.len(),
            displayed = sorted.len(),
            sort = %self.sort,
            "listing recomputed"
        );
        sorted
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed().len()
    }

    /// Header counter, e.g. `"1 product"` / `"12 products"`.
    pub fn count_label(&self) -> String {
        let count = self.displayed_count();
        let noun = if count <= 1 { "product" } else { "products" };
        format!("{count} {noun}")
    }
}
