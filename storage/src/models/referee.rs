use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Federation-level referee. Not owned by any team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Referee {
    pub referee_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
