use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::CoachRole;
use crate::services::roster_sync::SyncOutcome;

/// Target referee roster for an event. The stored roster is reconciled to
/// exactly this set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SyncRefereesRequest {
    pub referee_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CoachAssignment {
    pub coach_id: Uuid,
    pub role: CoachRole,
}

/// Target coach roster for one team at an event. Coaches of other teams are
/// out of scope for the sync and stay untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SyncCoachesRequest {
    pub team_id: Uuid,
    pub coaches: Vec<CoachAssignment>,
}

/// One alive referee assignment joined with referee identity, for roster
/// listings.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct EventRefereeEntry {
    pub assignment_id: Uuid,
    pub referee_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}

/// One alive coach registration joined with coach identity and owning team.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct EventCoachEntry {
    pub registration_id: Uuid,
    pub coach_id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: CoachRole,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RosterSyncResponse {
    pub added: Vec<Uuid>,
    pub removed: Vec<Uuid>,
    pub updated: Vec<Uuid>,
}

impl From<SyncOutcome> for RosterSyncResponse {
    fn from(outcome: SyncOutcome) -> Self {
        Self {
            added: outcome.added,
            removed: outcome.removed,
            updated: outcome.updated,
        }
    }
}
