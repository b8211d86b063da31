use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Referee;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRefereeRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(length(min = 1, max = 50))]
    pub license_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefereeResponse {
    pub referee_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<Referee> for RefereeResponse {
    fn from(referee: Referee) -> Self {
        Self {
            referee_id: referee.referee_id,
            first_name: referee.first_name,
            last_name: referee.last_name,
            license_number: referee.license_number,
            created_at: referee.created_at,
        }
    }
}
