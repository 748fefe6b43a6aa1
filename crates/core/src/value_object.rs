//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects defined entirely by their
/// attribute values: two instances with the same values are the same value.
/// A journal line is a value object; an account (which has an id and a
/// lifecycle) is an entity.
///
/// The supertraits keep value objects cheap to copy, comparable by value and
/// printable in logs/tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
