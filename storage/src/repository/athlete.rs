use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{AthleteListFilter, CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str =
    "athlete_id, team_id, first_name, last_name, dni, gender, birth_year, created_at, deleted_at";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List alive athletes, optionally restricted to one team, paginated.
    /// Returns the page plus the unpaginated total.
    pub async fn list(&self, filter: &AthleteListFilter) -> Result<(Vec<Athlete>, i64)> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            SELECT {ATHLETE_COLUMNS}
            FROM athletes
            WHERE deleted_at IS NULL
              AND ($1::uuid IS NULL OR team_id = $1)
            ORDER BY last_name, first_name
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(filter.team_id)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM athletes
            WHERE deleted_at IS NULL
              AND ($1::uuid IS NULL OR team_id = $1)
            "#,
        )
        .bind(filter.team_id)
        .fetch_one(self.pool)
        .await?;

        Ok((athletes, total))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE athlete_id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            INSERT INTO athletes (team_id, first_name, last_name, dni, gender, birth_year)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(req.team_id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.dni)
        .bind(req.gender)
        .bind(req.birth_year)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("DNI already registered within this team")
        })?;

        Ok(athlete)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let dni = req.dni.as_ref().unwrap_or(&existing.dni);
        let gender = req.gender.unwrap_or(existing.gender);
        let birth_year = req.birth_year.unwrap_or(existing.birth_year);

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET first_name = $2, last_name = $3, dni = $4, gender = $5, birth_year = $6
            WHERE athlete_id = $1 AND deleted_at IS NULL
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(dni)
        .bind(gender)
        .bind(birth_year)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("DNI already registered within this team")
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE athletes SET deleted_at = now() WHERE athlete_id = $1 AND deleted_at IS NULL",
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
