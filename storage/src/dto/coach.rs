use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Coach;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CoachListFilter {
    /// Restrict the listing to one team's coaches.
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCoachRequest {
    pub team_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(length(min = 5, max = 20))]
    pub dni: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CoachResponse {
    pub coach_id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub created_at: DateTime<Utc>,
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            coach_id: coach.coach_id,
            team_id: coach.team_id,
            first_name: coach.first_name,
            last_name: coach.last_name,
            dni: coach.dni,
            created_at: coach.created_at,
        }
    }
}
