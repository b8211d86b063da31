use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::coach::{CoachListFilter, CoachResponse, CreateCoachRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/coaches",
    params(CoachListFilter),
    responses(
        (status = 200, description = "List coaches successfully", body = Vec<CoachResponse>)
    ),
    tag = "coaches"
)]
pub async fn list_coaches(
    State(db): State<Database>,
    Query(filter): Query<CoachListFilter>,
) -> Result<Json<Vec<CoachResponse>>, WebError> {
    let coaches = services::list_coaches(db.pool(), filter.team_id).await?;

    let response: Vec<CoachResponse> = coaches.into_iter().map(CoachResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/coaches",
    request_body = CreateCoachRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Coach created successfully", body = CoachResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "DNI already registered within the team")
    ),
    tag = "coaches"
)]
pub async fn create_coach(
    State(db): State<Database>,
    Json(req): Json<CreateCoachRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let coach = services::create_coach(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CoachResponse::from(coach))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/coaches/{id}",
    params(
        ("id" = Uuid, Path, description = "Coach id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Coach deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Coach not found")
    ),
    tag = "coaches"
)]
pub async fn delete_coach(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_coach(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
