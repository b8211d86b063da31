use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::PaginationParams;
use crate::models::{Athlete, Gender};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    pub team_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(length(min = 5, max = 20, message = "DNI must be between 5 and 20 characters"))]
    pub dni: String,

    pub gender: Gender,

    /// Plausibility window only; the eligibility service re-checks against
    /// the reference year.
    #[validate(range(min = 1900, max = 2100))]
    pub birth_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub dni: Option<String>,

    pub gender: Option<Gender>,

    #[validate(range(min = 1900, max = 2100))]
    pub birth_year: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AthleteListFilter {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    /// Restrict the listing to one team's athletes.
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub gender: Gender,
    pub birth_year: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            team_id: athlete.team_id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            dni: athlete.dni,
            gender: athlete.gender,
            birth_year: athlete.birth_year,
            created_at: athlete.created_at,
        }
    }
}
