use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::{Event, EventStatus};

const EVENT_COLUMNS: &str =
    "event_id, name, slug, venue, city, start_date, end_date, status, created_at, deleted_at";

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE deleted_at IS NULL
            ORDER BY start_date DESC, created_at DESC
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE slug = $1 AND deleted_at IS NULL"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// New events always start in draft.
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (name, slug, venue, city, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'draft')
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.slug)
        .bind(&req.venue)
        .bind(&req.city)
        .bind(req.start_date)
        .bind(req.end_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation("Slug already exists"))?;

        Ok(event)
    }

    pub async fn update_status(&self, id: Uuid, status: EventStatus) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET status = $2
            WHERE event_id = $1 AND deleted_at IS NULL
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }
}
