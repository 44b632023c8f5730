use core::cmp::Ordering;
use std::collections::HashSet;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Category label used as a filter key.
///
/// Compared byte-for-byte: `"Electronics"` and `"electronics"` are different
/// categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Unit price of a product. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        // Folds -0.0 into 0.0 so `total_cmp` agrees with `==`.
        Ok(Self(value + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order over prices; valid because NaN is rejected at construction.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Customer rating as shipped by the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A sellable item (matches the catalog response shape).
///
/// `category` is optional so a malformed record still decodes: a missing,
/// `null` or non-string category becomes `None`, and such a product never
/// matches a category filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Any JSON value is accepted for a category; only strings are kept.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCategory {
        Label(String),
        Other(IgnoredAny),
    }

    Ok(match RawCategory::deserialize(deserializer)? {
        RawCategory::Label(label) => Some(Category(label)),
        RawCategory::Other(_) => None,
    })
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: Some(category.into()),
            description: String::new(),
            image: String::new(),
            rating: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn is_in(&self, category: &Category) -> bool {
        self.category.as_ref() == Some(category)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Products and categories as loaded once from the catalog source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self { products, categories }
    }

    /// Build a catalog whose category list is the distinct product categories
    /// in first-seen order.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let categories = products
            .iter()
            .filter_map(Product::category)
            .filter(|c| seen.insert((*c).clone()))
            .cloned()
            .collect();
        Self { products, categories }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a single product (product detail page).
    pub fn find(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(DomainError::not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: f64) -> Price {
        Price::new(value).unwrap()
    }

    fn product(id: u64, title: &str, value: f64, category: &str) -> Product {
        Product::new(ProductId::new(id), title, price(value), category)
    }

    #[test]
    fn price_rejects_negative_value() {
        let err = Price::new(-0.01).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("negative")),
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn price_rejects_nan_and_infinity() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn price_normalizes_negative_zero() {
        let p = price(-0.0);
        assert_eq!(p.total_cmp(&price(0.0)), Ordering::Equal);
        assert!(p.value().is_sign_positive());
    }

    #[test]
    fn price_displays_two_decimals() {
        assert_eq!(price(109.95).to_string(), "109.95");
        assert_eq!(price(3.0).to_string(), "3.00");
    }

    #[test]
    fn decodes_catalog_record() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.test/img/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, price(109.95));
        assert_eq!(product.category(), Some(&Category::new("men's clothing")));
        assert_eq!(product.rating.map(|r| r.count), Some(120));
    }

    #[test]
    fn decodes_record_without_category() {
        let json = r#"{ "id": 2, "title": "Loose item", "price": 4 }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.category().is_none());
        assert!(product.description.is_empty());
        assert!(!product.is_in(&Category::new("fruit")));
    }

    #[test]
    fn wrong_typed_category_only_drops_that_product_from_filtered_views() {
        let json = r#"[
            { "id": 1, "title": "Odd", "price": 1, "category": 7 },
            { "id": 2, "title": "Pear", "price": 2, "category": "fruit" },
            { "id": 3, "title": "Nested", "price": 3, "category": { "name": "fruit" } },
            { "id": 4, "title": "Null", "price": 4, "category": null }
        ]"#;

        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 4);
        assert!(products[0].category().is_none());
        assert!(products[2].category().is_none());
        assert!(products[3].category().is_none());

        let fruit = crate::filter_by_categories(&products, &[Category::new("fruit")]);
        let ids: Vec<u64> = fruit.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2]);

        let everything = crate::filter_by_categories::<Category>(&products, &[]);
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn builder_fills_presentational_fields() {
        let p = product(5, "Lamp", 20.0, "home")
            .with_description("Warm light")
            .with_image("lamp.png");

        assert_eq!(p.description, "Warm light");
        assert_eq!(p.image, "lamp.png");
        assert_eq!(Entity::id(&p), &ProductId::new(5));
    }

    #[test]
    fn rejects_record_with_negative_price() {
        let json = r#"{ "id": 3, "title": "Broken", "price": -1, "category": "x" }"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn catalog_derives_categories_in_first_seen_order() {
        let catalog = Catalog::from_products(vec![
            product(1, "Banana", 3.0, "fruit"),
            product(2, "Bolt", 1.0, "hardware"),
            product(3, "Apple", 5.0, "fruit"),
        ]);

        assert_eq!(
            catalog.categories(),
            &[Category::new("fruit"), Category::new("hardware")]
        );
    }

    #[test]
    fn catalog_find_returns_not_found_for_unknown_id() {
        let catalog = Catalog::from_products(vec![product(1, "Banana", 3.0, "fruit")]);

        assert_eq!(catalog.find(ProductId::new(1)).unwrap().title, "Banana");
        assert_eq!(catalog.find(ProductId::new(9)).unwrap_err(), DomainError::NotFound);
    }
}
