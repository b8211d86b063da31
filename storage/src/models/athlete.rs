use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Gender;

/// A licensed athlete, owned by exactly one team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// National identity document, unique within the owning team.
    pub dni: String,
    pub gender: Gender,
    pub birth_year: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
