use sqlx::PgPool;
use storage::{
    dto::athlete::{AthleteListFilter, CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    models::Athlete,
    repository::{athlete::AthleteRepository, team::TeamRepository},
};
use uuid::Uuid;

/// List alive athletes with pagination, optionally scoped to a team
pub async fn list_athletes(pool: &PgPool, filter: &AthleteListFilter) -> Result<(Vec<Athlete>, i64)> {
    let repo = AthleteRepository::new(pool);
    repo.list(filter).await
}

/// Get athlete by id
pub async fn get_athlete(pool: &PgPool, id: Uuid) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new athlete under an existing team
pub async fn create_athlete(pool: &PgPool, request: &CreateAthleteRequest) -> Result<Athlete> {
    // Surface a clean NotFound for a dangling team id instead of an FK error.
    TeamRepository::new(pool).find_by_id(request.team_id).await?;

    let repo = AthleteRepository::new(pool);
    repo.create(request).await
}

/// Update an athlete
pub async fn update_athlete(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Soft-delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.soft_delete(id).await
}
