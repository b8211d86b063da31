use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::registration::{CreateRegistrationRequest, UpdateRegistrationRequest};
use crate::error::{Result, StorageError};
use crate::models::Registration;

const REGISTRATION_COLUMNS: &str = "registration_id, tournament_id, athlete_id, weight_class, \
     opener_squat, opener_bench, opener_deadlift, created_at, deleted_at";

pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_tournament(&self, tournament_id: Uuid) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            r#"
            SELECT {REGISTRATION_COLUMNS}
            FROM registrations
            WHERE tournament_id = $1 AND deleted_at IS NULL
            ORDER BY weight_class, created_at
            "#
        ))
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE registration_id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    pub async fn create(
        &self,
        tournament_id: Uuid,
        req: &CreateRegistrationRequest,
    ) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            INSERT INTO registrations
                (tournament_id, athlete_id, weight_class, opener_squat, opener_bench, opener_deadlift)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(tournament_id)
        .bind(req.athlete_id)
        .bind(req.weight_class)
        .bind(req.opener_squat)
        .bind(req.opener_bench)
        .bind(req.opener_deadlift)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique_violation("Athlete is already registered in this tournament")
        })?;

        Ok(registration)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Registration,
        req: &UpdateRegistrationRequest,
    ) -> Result<Registration> {
        let weight_class = req.weight_class.unwrap_or(existing.weight_class);
        let opener_squat = req.opener_squat.or(existing.opener_squat);
        let opener_bench = req.opener_bench.or(existing.opener_bench);
        let opener_deadlift = req.opener_deadlift.or(existing.opener_deadlift);

        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            UPDATE registrations
            SET weight_class = $2, opener_squat = $3, opener_bench = $4, opener_deadlift = $5
            WHERE registration_id = $1 AND deleted_at IS NULL
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(weight_class)
        .bind(opener_squat)
        .bind(opener_bench)
        .bind(opener_deadlift)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE registrations SET deleted_at = now() WHERE registration_id = $1 AND deleted_at IS NULL",
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
