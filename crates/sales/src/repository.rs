//! Reservation storage contract and its in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use ecommerce_core::{Entity, Id, RepositoryError};

use crate::reservation::Reservation;

/// Storage abstraction for reservations.
pub trait ReservationRepository: Send + Sync {
    /// Load a reservation by id. `Ok(None)` when it does not exist.
    fn load(&self, id: &Id) -> Result<Option<Reservation>, RepositoryError>;

    /// Insert or replace a reservation.
    fn save(&self, reservation: &Reservation) -> Result<(), RepositoryError>;
}

/// In-memory reservation store.
///
/// Intended for tests/dev. Last write wins; there is no version check.
#[derive(Debug, Default)]
pub struct InMemoryReservationRepository {
    reservations: RwLock<HashMap<Id, Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationRepository for InMemoryReservationRepository {
    fn load(&self, id: &Id) -> Result<Option<Reservation>, RepositoryError> {
        let reservations = self
            .reservations
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        Ok(reservations.get(id).cloned())
    }

    fn save(&self, reservation: &Reservation) -> Result<(), RepositoryError> {
        let mut reservations = self
            .reservations
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        reservations.insert(reservation.id().clone(), reservation.clone());
        Ok(())
    }
}
