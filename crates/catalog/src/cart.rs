//! Shopping cart state behind the cart drawer and the cart button badge.

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Largest count the cart badge renders before switching to `"99+"`.
pub const BADGE_MAX: u32 = 99;

/// Cart line: product snapshot and quantity (always >= 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price.value() * f64::from(self.quantity)
    }
}

/// Owned cart state. Lines keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`, merging with an existing line.
    pub fn add(&mut self, product: &Product) -> u32 {
        let quantity = match self.line_mut(product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity: 1,
                });
                1
            }
        };
        tracing::debug!(product_id = %product.id, quantity, "added to cart");
        quantity
    }

    pub fn increase(&mut self, id: ProductId) -> DomainResult<u32> {
        let line = self.line_mut(id).ok_or_else(DomainError::not_found)?;
        line.quantity = line.quantity.saturating_add(1);
        Ok(line.quantity)
    }

    /// Remove one unit; the line disappears when its quantity reaches zero.
    pub fn decrease(&mut self, id: ProductId) -> DomainResult<u32> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        let line = &mut self.lines[index];
        line.quantity -= 1;
        let remaining = line.quantity;
        if remaining == 0 {
            self.lines.remove(index);
            tracing::debug!(product_id = %id, "cart line removed");
        }
        Ok(remaining)
    }

    pub fn remove(&mut self, id: ProductId) -> DomainResult<CartLine> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.position(id).map_or(0, |i| self.lines[i].quantity)
    }

    /// Number of units across all lines (badge count).
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Badge text: the unit count, capped at `"99+"`. Empty carts show nothing.
    pub fn badge_label(&self) -> Option<String> {
        match self.total_quantity() {
            0 => None,
            n if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
            n => Some(n.to_string()),
        }
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Whether the cart drawer is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_drawer(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product.id == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }
}
