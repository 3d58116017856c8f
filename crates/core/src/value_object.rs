//! Value object trait: equality by value, not identity.
//!
//! Everything that ends up on an invoice (money, client data, product
//! snapshots, taxes, request items) is a value object.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances with
/// the same attributes are interchangeable.
///
/// - **Value Object**: `Money`, `ClientData`, `ProductData`, `Tax`, `RequestItem`
/// - **Entity**: `Product`, `Reservation` (see [`crate::Entity`])
///
/// To "modify" a value object, build a new one. `Send + Sync` is required so
/// issued invoices can be handed to other threads freely.
///
/// ```ignore
/// let m1 = Money::from_units(10);
/// let m2 = Money::new(dec!(10.00));
/// assert_eq!(m1, m2); // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
