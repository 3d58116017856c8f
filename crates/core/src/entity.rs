//! Entity trait: identity + continuity across state changes.

use crate::id::Id;

/// Entity marker + minimal interface.
///
/// Products and reservations are entities; everything that flows into an
/// invoice is a value object (see [`crate::ValueObject`]).
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> &Id;
}
