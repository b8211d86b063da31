use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::referee::CreateRefereeRequest;
use crate::error::{Result, StorageError};
use crate::models::Referee;

pub struct RefereeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RefereeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Referee>> {
        let referees = sqlx::query_as::<_, Referee>(
            r#"
            SELECT referee_id, first_name, last_name, license_number, created_at, deleted_at
            FROM referees
            WHERE deleted_at IS NULL
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(referees)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Referee> {
        let referee = sqlx::query_as::<_, Referee>(
            r#"
            SELECT referee_id, first_name, last_name, license_number, created_at, deleted_at
            FROM referees
            WHERE referee_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(referee)
    }

    /// Alive referee ids among the given set; used to validate sync targets.
    pub async fn existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>> {
        let found: Vec<Uuid> = sqlx::query_scalar(
            "SELECT referee_id FROM referees WHERE referee_id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(found)
    }

    pub async fn create(&self, req: &CreateRefereeRequest) -> Result<Referee> {
        let referee = sqlx::query_as::<_, Referee>(
            r#"
            INSERT INTO referees (first_name, last_name, license_number)
            VALUES ($1, $2, $3)
            RETURNING referee_id, first_name, last_name, license_number, created_at, deleted_at
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.license_number)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation("License number already exists"))?;

        Ok(referee)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE referees SET deleted_at = now() WHERE referee_id = $1 AND deleted_at IS NULL",
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
