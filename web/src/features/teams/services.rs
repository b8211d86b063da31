use sqlx::PgPool;
use storage::{
    dto::team::CreateTeamRequest, error::Result, models::Team, repository::team::TeamRepository,
};

/// List all alive teams
pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

/// Get team by slug
pub async fn get_team_by_slug(pool: &PgPool, slug: &str) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.find_by_slug(slug).await
}

/// Create a new team
pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.create(request).await
}

/// Soft-delete a team
pub async fn delete_team(pool: &PgPool, slug: &str) -> Result<()> {
    let repo = TeamRepository::new(pool);
    let team = repo.find_by_slug(slug).await?;
    repo.soft_delete(team.team_id).await
}
