use sqlx::PgPool;
use storage::{
    dto::coach::CreateCoachRequest,
    error::Result,
    models::Coach,
    repository::{coach::CoachRepository, team::TeamRepository},
};
use uuid::Uuid;

/// List alive coaches, optionally scoped to a team
pub async fn list_coaches(pool: &PgPool, team_id: Option<Uuid>) -> Result<Vec<Coach>> {
    let repo = CoachRepository::new(pool);
    repo.list(team_id).await
}

/// Create a new coach under an existing team
pub async fn create_coach(pool: &PgPool, request: &CreateCoachRequest) -> Result<Coach> {
    TeamRepository::new(pool).find_by_id(request.team_id).await?;

    let repo = CoachRepository::new(pool);
    repo.create(request).await
}

/// Soft-delete a coach
pub async fn delete_coach(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = CoachRepository::new(pool);
    repo.soft_delete(id).await
}
