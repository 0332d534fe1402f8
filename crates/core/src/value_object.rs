//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Derived
/// classifications (such as a stock status computed from a quantity) are value
/// objects: they have no identity and are recomputed rather than stored.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
