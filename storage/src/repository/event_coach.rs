use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::roster::EventCoachEntry;
use crate::error::{Result, StorageError};
use crate::models::CoachRole;
use crate::services::roster_sync::{ActiveAssociation, AssociationStore};

/// Postgres-backed store for the event ↔ coach roster.
///
/// When scoped to a team, `find_active` only surfaces that team's coaches,
/// so a team-level sync cannot see or remove another team's registrations.
pub struct EventCoachRosterStore<'a> {
    pool: &'a PgPool,
    team_scope: Option<Uuid>,
}

impl<'a> EventCoachRosterStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            team_scope: None,
        }
    }

    pub fn scoped_to_team(pool: &'a PgPool, team_id: Uuid) -> Self {
        Self {
            pool,
            team_scope: Some(team_id),
        }
    }

    /// Alive coach registrations joined with coach identity, for listings.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<EventCoachEntry>> {
        let entries = sqlx::query_as::<_, EventCoachEntry>(
            r#"
            SELECT ecr.registration_id, ecr.coach_id, c.team_id,
                   c.first_name, c.last_name, ecr.role
            FROM event_coach_registrations ecr
            JOIN coaches c ON c.coach_id = ecr.coach_id
            WHERE ecr.event_id = $1 AND ecr.deleted_at IS NULL
              AND ($2::uuid IS NULL OR c.team_id = $2)
            ORDER BY c.team_id, c.last_name, c.first_name
            "#,
        )
        .bind(event_id)
        .bind(self.team_scope)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}

#[async_trait]
impl AssociationStore for EventCoachRosterStore<'_> {
    type Attrs = CoachRole;

    async fn find_active(&self, parent_id: Uuid) -> Result<Vec<ActiveAssociation<CoachRole>>> {
        let rows: Vec<(Uuid, Uuid, CoachRole)> = sqlx::query_as(
            r#"
            SELECT ecr.registration_id, ecr.coach_id, ecr.role
            FROM event_coach_registrations ecr
            JOIN coaches c ON c.coach_id = ecr.coach_id
            WHERE ecr.event_id = $1 AND ecr.deleted_at IS NULL
              AND ($2::uuid IS NULL OR c.team_id = $2)
            "#,
        )
        .bind(parent_id)
        .bind(self.team_scope)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(association_id, child_id, attrs)| ActiveAssociation {
                association_id,
                child_id,
                attrs,
            })
            .collect())
    }

    async fn insert(&self, parent_id: Uuid, child_id: Uuid, attrs: &CoachRole) -> Result<()> {
        sqlx::query(
            "INSERT INTO event_coach_registrations (event_id, coach_id, role) VALUES ($1, $2, $3)",
        )
        .bind(parent_id)
        .bind(child_id)
        .bind(attrs)
        .execute(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("Coach is already registered for this event")
        })?;

        Ok(())
    }

    async fn soft_delete(&self, association_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE event_coach_registrations SET deleted_at = now() \
             WHERE registration_id = $1 AND deleted_at IS NULL",
        )
        .bind(association_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn update_attrs(&self, association_id: Uuid, attrs: &CoachRole) -> Result<()> {
        let result = sqlx::query(
            "UPDATE event_coach_registrations SET role = $2 \
             WHERE registration_id = $1 AND deleted_at IS NULL",
        )
        .bind(association_id)
        .bind(attrs)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
