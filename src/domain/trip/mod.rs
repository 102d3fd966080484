//! Trip aggregate and its owned entities.

pub mod aggregate;
pub mod conflict;
pub mod events;
pub mod member;

pub use aggregate::{Trip, MAX_DESTINATION_LENGTH};
pub use conflict::{ConflictCategory, ConflictId, ConflictItem, ResolutionOutcome, Severity};
pub use events::TripEvent;
pub use member::{Member, MAX_INTERESTS, MAX_NAME_LENGTH};
