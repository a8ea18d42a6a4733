//! Value object trait: equality by value, not identity.
//!
//! Item categories and aging snapshots have no identity of their own; two
//! with the same attributes are interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Category::AgedBrie` is `Category::AgedBrie`)
/// - **Entity**: a record whose fields evolve over time (an inventory item
///   whose `sell_in` and `quality` change every day)
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: readable in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
