//! Sort criterion state and the sorting engine.

use core::cmp::Ordering;
use core::str::FromStr;

use crate::product::Product;

/// Ordering rule applied to the filtered product set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortCriterion {
    /// Cheapest first.
    AscendingPrice,
    /// Most expensive first.
    DescendingPrice,
    /// Title, lexicographic ascending.
    #[default]
    Default,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Default,
        SortCriterion::AscendingPrice,
        SortCriterion::DescendingPrice,
    ];

    /// Map a sort-select value onto a criterion.
    ///
    /// Unrecognized values (including the empty "no selection" value) fall
    /// back to [`SortCriterion::Default`].
    pub fn from_selection(value: &str) -> Self {
        match value.trim() {
            "ASCENDING_PRICE" => SortCriterion::AscendingPrice,
            "DECREASING_PRICE" | "DESCENDING_PRICE" => SortCriterion::DescendingPrice,
            _ => SortCriterion::Default,
        }
    }

    /// Select value for this criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::AscendingPrice => "ASCENDING_PRICE",
            SortCriterion::DescendingPrice => "DECREASING_PRICE",
            SortCriterion::Default => "DEFAULT",
        }
    }

    /// Human-readable label for the sort select.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::AscendingPrice => "Price: low to high",
            SortCriterion::DescendingPrice => "Price: high to low",
            SortCriterion::Default => "Name",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortCriterion::AscendingPrice => a.price.total_cmp(&b.price),
            SortCriterion::DescendingPrice => b.price.total_cmp(&a.price),
            SortCriterion::Default => a.title.cmp(&b.title),
        }
    }
}

impl FromStr for SortCriterion {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selection(s))
    }
}

impl core::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order `products` by `criterion` into a new vector.
///
/// The sort is stable for every criterion: products with equal keys keep
/// their input order. The input slice is left as is.
pub fn sort_products<'a>(products: &[&'a Product], criterion: SortCriterion) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| criterion.compare(a, b));
    sorted
}
