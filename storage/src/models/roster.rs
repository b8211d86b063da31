use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "coach_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CoachRole {
    HeadCoach,
    AssistantCoach,
}

/// Event ↔ referee association row. At most one alive row per
/// (event, referee) pair; removal soft-deletes, re-adding creates a new row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventRefereeAssignment {
    pub assignment_id: Uuid,
    pub event_id: Uuid,
    pub referee_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Event ↔ coach association row with the coach's role at that event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventCoachRegistration {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub coach_id: Uuid,
    pub role: CoachRole,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
