//! Category selection state and the filtering engine.

use core::borrow::Borrow;

use crate::product::{Category, Product};

/// Per-category "active" flags, one entry per category in supplied order.
///
/// All entries start inactive. Toggling flips a single entry; any number of
/// categories may be active at once (multi-select, OR'd per product).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    entries: Vec<(Category, bool)>,
}

impl CategoryFilter {
    pub fn new(categories: &[Category]) -> Self {
        Self {
            entries: categories.iter().cloned().map(|c| (c, false)).collect(),
        }
    }

    /// Rebuild for a new category list, keeping the flags of categories that
    /// survive by name.
    pub fn rebuild(&self, categories: &[Category]) -> Self {
        let entries = categories
            .iter()
            .map(|c| {
                let active = self
                    .entries
                    .iter()
                    .any(|(existing, active)| *active && existing == c);
                (c.clone(), active)
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flip the flag at `index` and return its new value.
    ///
    /// Out-of-range indices leave the state untouched and report `false`.
    pub fn toggle(&mut self, index: usize) -> bool {
        let len = self.entries.len();
        match self.entries.get_mut(index) {
            Some((category, active)) => {
                *active = !*active;
                tracing::debug!(category = %category, active = *active, "category toggled");
                *active
            }
            None => {
                tracing::debug!(index, len, "ignoring toggle for unknown category index");
                false
            }
        }
    }

    /// Flip the flag of `category`; unknown categories are ignored.
    pub fn toggle_category(&mut self, category: &Category) -> bool {
        match self.index_of(category) {
            Some(index) => self.toggle(index),
            None => {
                tracing::debug!(category = %category, "ignoring toggle for unknown category");
                false
            }
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|(_, active)| *active)
    }

    pub fn index_of(&self, category: &Category) -> Option<usize> {
        self.entries.iter().position(|(c, _)| c == category)
    }

    /// Deactivate every category.
    pub fn clear(&mut self) {
        for (_, active) in &mut self.entries {
            *active = false;
        }
    }

    /// Entries in supplied order, for rendering the toggle list.
    pub fn entries(&self) -> impl Iterator<Item = (&Category, bool)> + '_ {
        self.entries.iter().map(|(c, active)| (c, *active))
    }

    /// Active categories in supplied order.
    pub fn active_categories(&self) -> Vec<&Category> {
        self.entries
            .iter()
            .filter(|(_, active)| *active)
            .map(|(c, _)| c)
            .collect()
    }
}

/// Products whose category is one of `active`, in input order.
///
/// An empty `active` set means "no restriction" and yields every product.
pub fn filter_by_categories<'a, C>(products: &'a [Product], active: &[C]) -> Vec<&'a Product>
where
    C: Borrow<Category>,
{
    if active.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| active.iter().any(|c| p.is_in(c.borrow())))
        .collect()
}

/// Products whose title contains `query`, ignoring case and surrounding
/// whitespace. An empty query keeps everything.
pub fn filter_by_title<'a, I>(products: I, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.into_iter().collect();
    }

    products
        .into_iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}
