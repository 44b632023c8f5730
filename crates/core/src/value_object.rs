//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are immutable once built. To "change" one, build a
/// new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `Price(9.99)`, `Category("jewelery")`
/// - **Entity**: `Product { id: ProductId(1), .. }`
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(3.0), Price(3.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
