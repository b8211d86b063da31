use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Equipment, Modality, Tournament, TournamentDivision};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTournamentRequest {
    pub division: TournamentDivision,
    pub modality: Modality,
    pub equipment: Equipment,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentResponse {
    pub tournament_id: Uuid,
    pub event_id: Uuid,
    pub division: TournamentDivision,
    pub modality: Modality,
    pub equipment: Equipment,
    pub created_at: DateTime<Utc>,
}

impl From<Tournament> for TournamentResponse {
    fn from(tournament: Tournament) -> Self {
        Self {
            tournament_id: tournament.tournament_id,
            event_id: tournament.event_id,
            division: tournament.division,
            modality: tournament.modality,
            equipment: tournament.equipment,
            created_at: tournament.created_at,
        }
    }
}
