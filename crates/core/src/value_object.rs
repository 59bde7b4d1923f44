//! Value object trait: equality by value, not identity.
//!
//! Financial inputs and results (order lines, cost breakdowns, calculation
//! results) have **no identity**: two values with the same fields are the same
//! value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `OrderLine { price: 2700, quantity: 1000 }`
/// - **Entity**: `Product { id: ProductId(...), name: "..." }`
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared in tests, and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
