use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::CreateTournamentRequest;
use crate::error::{Result, StorageError};
use crate::models::Tournament;

const TOURNAMENT_COLUMNS: &str =
    "tournament_id, event_id, division, modality, equipment, created_at, deleted_at";

pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(&format!(
            r#"
            SELECT {TOURNAMENT_COLUMNS}
            FROM tournaments
            WHERE event_id = $1 AND deleted_at IS NULL
            ORDER BY division, modality, equipment
            "#
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE tournament_id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    pub async fn create(&self, event_id: Uuid, req: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            r#"
            INSERT INTO tournaments (event_id, division, modality, equipment)
            VALUES ($1, $2, $3, $4)
            RETURNING {TOURNAMENT_COLUMNS}
            "#
        ))
        .bind(event_id)
        .bind(req.division)
        .bind(req.modality)
        .bind(req.equipment)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique_violation("This division/modality/equipment bracket already exists")
        })?;

        Ok(tournament)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE tournaments SET deleted_at = now() WHERE tournament_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
