//! `ecommerce-core` — shared kernel for the sales domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, client data, money and the domain error model.

pub mod client;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use client::ClientData;
pub use entity::Entity;
pub use error::{DomainError, DomainResult, RepositoryError};
pub use id::Id;
pub use money::Money;
pub use value_object::ValueObject;
