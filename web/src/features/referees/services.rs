use sqlx::PgPool;
use storage::{
    dto::referee::CreateRefereeRequest, error::Result, models::Referee,
    repository::referee::RefereeRepository,
};
use uuid::Uuid;

/// List all alive referees
pub async fn list_referees(pool: &PgPool) -> Result<Vec<Referee>> {
    let repo = RefereeRepository::new(pool);
    repo.list().await
}

/// Create a new referee
pub async fn create_referee(pool: &PgPool, request: &CreateRefereeRequest) -> Result<Referee> {
    let repo = RefereeRepository::new(pool);
    repo.create(request).await
}

/// Soft-delete a referee
pub async fn delete_referee(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = RefereeRepository::new(pool);
    repo.soft_delete(id).await
}
