use sqlx::PgPool;
use storage::{
    dto::tournament::CreateTournamentRequest,
    error::Result,
    models::Tournament,
    repository::{event::EventRepository, tournament::TournamentRepository},
};
use uuid::Uuid;

/// List an event's alive tournaments
pub async fn list_tournaments(pool: &PgPool, event_slug: &str) -> Result<Vec<Tournament>> {
    let event = EventRepository::new(pool).find_by_slug(event_slug).await?;

    let repo = TournamentRepository::new(pool);
    repo.list_for_event(event.event_id).await
}

/// Create a tournament bracket under an event
pub async fn create_tournament(
    pool: &PgPool,
    event_slug: &str,
    request: &CreateTournamentRequest,
) -> Result<Tournament> {
    let event = EventRepository::new(pool).find_by_slug(event_slug).await?;

    let repo = TournamentRepository::new(pool);
    repo.create(event.event_id, request).await
}

/// Soft-delete a tournament
pub async fn delete_tournament(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = TournamentRepository::new(pool);
    repo.soft_delete(id).await
}
