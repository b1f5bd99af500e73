//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same values are
/// the same value. Match patterns, price formulas and change sets are value
/// objects: they are built, compared and thrown away, never stored by id.
///
/// To "modify" a value object, build a new one. Pricing relies on this when it
/// augments a caller's pattern: the caller's value is copied, never edited.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
