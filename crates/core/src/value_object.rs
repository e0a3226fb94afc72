//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two heritage cards with the same image,
/// title and description are interchangeable. They are immutable once loaded.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
