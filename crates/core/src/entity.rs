//! Entity trait: identity that outlives attribute changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same thing, even when a later fetch
/// returns different attributes (price, title) for it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
