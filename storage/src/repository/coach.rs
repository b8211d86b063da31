use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::coach::CreateCoachRequest;
use crate::error::{Result, StorageError};
use crate::models::Coach;

pub struct CoachRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CoachRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, team_id: Option<Uuid>) -> Result<Vec<Coach>> {
        let coaches = sqlx::query_as::<_, Coach>(
            r#"
            SELECT coach_id, team_id, first_name, last_name, dni, created_at, deleted_at
            FROM coaches
            WHERE deleted_at IS NULL
              AND ($1::uuid IS NULL OR team_id = $1)
            ORDER BY last_name, first_name
            "#,
        )
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(coaches)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            SELECT coach_id, team_id, first_name, last_name, dni, created_at, deleted_at
            FROM coaches
            WHERE coach_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(coach)
    }

    /// Alive coach ids owned by a team. Used to pre-authorize roster syncs.
    pub async fn ids_for_team(&self, team_id: Uuid) -> Result<Vec<Uuid>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT coach_id FROM coaches WHERE team_id = $1 AND deleted_at IS NULL",
        )
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn create(&self, req: &CreateCoachRequest) -> Result<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            INSERT INTO coaches (team_id, first_name, last_name, dni)
            VALUES ($1, $2, $3, $4)
            RETURNING coach_id, team_id, first_name, last_name, dni, created_at, deleted_at
            "#,
        )
        .bind(req.team_id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.dni)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("DNI already registered within this team")
        })?;

        Ok(coach)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE coaches SET deleted_at = now() WHERE coach_id = $1 AND deleted_at IS NULL",
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
