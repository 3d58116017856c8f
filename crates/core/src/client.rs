//! Client identity as exchanged between the sales and invoicing contexts.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::Id;
use crate::value_object::ValueObject;

/// Client identity + display name.
///
/// Copied by value into reservations, requests and invoices, so renaming a
/// client later never rewrites already issued documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientData {
    id: Id,
    name: String,
}

impl ClientData {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Like [`ClientData::new`], but rejects a blank name.
    pub fn try_new(id: Id, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("client name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for ClientData {}
