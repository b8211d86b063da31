use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::TournamentDivision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "modality", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    FullPower,
    BenchOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "equipment", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Raw,
    Equipped,
}

/// One competition bracket inside an event. An event typically hosts several
/// tournaments (one per division/modality/equipment combination).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub event_id: Uuid,
    pub division: TournamentDivision,
    pub modality: Modality,
    pub equipment: Equipment,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
