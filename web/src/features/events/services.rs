use sqlx::PgPool;
use storage::{
    dto::event::CreateEventRequest,
    error::{Result, StorageError},
    models::{Event, EventStatus},
    repository::event::EventRepository,
};

/// List all alive events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Get event by slug
pub async fn get_event_by_slug(pool: &PgPool, slug: &str) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_slug(slug).await
}

/// Create a new event in draft status
pub async fn create_event(pool: &PgPool, request: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.create(request).await
}

/// Apply an admin lifecycle transition, enforcing the transition table
pub async fn transition_event(pool: &PgPool, slug: &str, next: EventStatus) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let event = repo.find_by_slug(slug).await?;

    if !event.status.can_transition_to(next) {
        return Err(StorageError::Conflict(format!(
            "cannot transition event '{}' from {} to {}",
            event.slug, event.status, next
        )));
    }

    repo.update_status(event.event_id, next).await
}
