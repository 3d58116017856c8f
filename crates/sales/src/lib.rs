//! Sales module: reservations and the application layer on top of invoicing.
//!
//! Domain rules for reservations live in [`reservation`]; [`handler`] adapts
//! commands into domain calls against injected repositories and tax policy.

pub mod command;
pub mod error;
pub mod handler;
pub mod repository;
pub mod reservation;

pub use command::{AddProductCommand, IssueInvoiceCommand};
pub use error::SalesError;
pub use handler::{AddProductCommandHandler, IssueInvoiceCommandHandler};
pub use repository::{InMemoryReservationRepository, ReservationRepository};
pub use reservation::{Reservation, ReservationBuilder, ReservationStatus, ReservedProduct};
