//! Trip domain events.

use super::conflict::ConflictId;
use crate::domain::foundation::{MemberId, Timestamp, TripId, TripStage};
use serde::{Deserialize, Serialize};

/// Events that can occur during the trip planning lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TripEvent {
    /// A new trip was created.
    Created {
        trip_id: TripId,
        created_at: Timestamp,
    },

    /// A member joined the trip.
    MemberAdded { trip_id: TripId, member_id: MemberId },

    /// An existing member's preferences were replaced.
    MemberUpdated { trip_id: TripId, member_id: MemberId },

    /// A member left the trip.
    MemberRemoved { trip_id: TripId, member_id: MemberId },

    /// Detection ran and refreshed the conflict list.
    ConflictsRecomputed {
        trip_id: TripId,
        active_conflicts: usize,
    },

    /// A conflict was settled by the group.
    ConflictResolved {
        trip_id: TripId,
        conflict_id: ConflictId,
    },

    /// The workflow moved to a new stage.
    StageAdvanced {
        trip_id: TripId,
        from: TripStage,
        to: TripStage,
    },

    /// A member edit pushed the workflow back for re-detection.
    StageDemoted {
        trip_id: TripId,
        from: TripStage,
        to: TripStage,
    },

    /// A generated plan was accepted onto the trip.
    PlanAttached { trip_id: TripId },
}
