//! Product catalog module.
//!
//! This crate contains the catalog entity and the immutable product snapshots
//! handed to reservations and invoicing (no IO, no HTTP, no storage).

pub mod product;
pub mod repository;
pub mod snapshot;

pub use product::{Product, ProductType};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use snapshot::{ProductData, ProductDataBuilder};
