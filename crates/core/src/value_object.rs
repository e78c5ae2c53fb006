//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values: two `Money` amounts of the same magnitude are the same value,
/// while two customers with the same name are still distinct entities.
/// "Modifying" a value object means constructing a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
