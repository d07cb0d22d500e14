//! Entity trait: a record with a stable identity across in-place updates.

/// Anything the record store keeps under a primary key.
pub trait Entity {
    /// Strongly-typed primary key.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the primary key.
    fn id(&self) -> Self::Id;
}
