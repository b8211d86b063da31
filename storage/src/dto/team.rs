use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_slug;
use crate::models::Team;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    #[validate(email)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub name: String,
    pub slug: String,
    pub city: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            team_id: team.team_id,
            name: team.name,
            slug: team.slug,
            city: team.city,
            contact_email: team.contact_email,
            created_at: team.created_at,
        }
    }
}
