use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::roster::EventRefereeEntry;
use crate::error::{Result, StorageError};
use crate::services::roster_sync::{ActiveAssociation, AssociationStore};

/// Postgres-backed store for the event ↔ referee roster. A partial unique
/// index on (event_id, referee_id) over alive rows backs up the reconciler
/// against racing writers.
pub struct EventRefereeRosterStore<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRefereeRosterStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Alive assignments joined with referee identity, for listings.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<EventRefereeEntry>> {
        let entries = sqlx::query_as::<_, EventRefereeEntry>(
            r#"
            SELECT era.assignment_id, era.referee_id,
                   r.first_name, r.last_name, r.license_number
            FROM event_referee_assignments era
            JOIN referees r ON r.referee_id = era.referee_id
            WHERE era.event_id = $1 AND era.deleted_at IS NULL
            ORDER BY r.last_name, r.first_name
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}

#[async_trait]
impl AssociationStore for EventRefereeRosterStore<'_> {
    type Attrs = ();

    async fn find_active(&self, parent_id: Uuid) -> Result<Vec<ActiveAssociation<()>>> {
        let rows: Vec<(Uuid, Uuid)> = sqlx::query_as(
            r#"
            SELECT assignment_id, referee_id
            FROM event_referee_assignments
            WHERE event_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(parent_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(association_id, child_id)| ActiveAssociation {
                association_id,
                child_id,
                attrs: (),
            })
            .collect())
    }

    async fn insert(&self, parent_id: Uuid, child_id: Uuid, _attrs: &()) -> Result<()> {
        sqlx::query("INSERT INTO event_referee_assignments (event_id, referee_id) VALUES ($1, $2)")
            .bind(parent_id)
            .bind(child_id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e)
                    .on_unique_violation("Referee is already assigned to this event")
            })?;

        Ok(())
    }

    async fn soft_delete(&self, association_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE event_referee_assignments SET deleted_at = now() \
             WHERE assignment_id = $1 AND deleted_at IS NULL",
        )
        .bind(association_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn update_attrs(&self, _association_id: Uuid, _attrs: &()) -> Result<()> {
        // Referee assignments carry no attributes; the planner never
        // schedules an update for them.
        Ok(())
    }
}
