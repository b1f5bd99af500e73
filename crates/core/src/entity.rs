//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products, categories and price lists are entities: renaming a category or
/// moving a product to another one does not make it a different record.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Two values are the same record when their ids match, whatever their state.
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
