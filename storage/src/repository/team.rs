use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::CreateTeamRequest;
use crate::error::{Result, StorageError};
use crate::models::Team;

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, slug, city, contact_email, created_at, deleted_at
            FROM teams
            WHERE deleted_at IS NULL
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, slug, city, contact_email, created_at, deleted_at
            FROM teams
            WHERE team_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, slug, city, contact_email, created_at, deleted_at
            FROM teams
            WHERE slug = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, slug, city, contact_email)
            VALUES ($1, $2, $3, $4)
            RETURNING team_id, name, slug, city, contact_email, created_at, deleted_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.slug)
        .bind(&req.city)
        .bind(&req.contact_email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation("Slug already exists"))?;

        Ok(team)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE teams SET deleted_at = now() WHERE team_id = $1 AND deleted_at IS NULL",
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
