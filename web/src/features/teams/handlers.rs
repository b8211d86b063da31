use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::team::{CreateTeamRequest, TeamResponse}};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "List all teams successfully", body = Vec<TeamResponse>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Json<Vec<TeamResponse>>, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    let response: Vec<TeamResponse> = teams.into_iter().map(TeamResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/teams/{slug}",
    params(
        ("slug" = String, Path, description = "Team slug")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let team = services::get_team_by_slug(db.pool(), &slug).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created successfully", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{slug}",
    params(
        ("slug" = String, Path, description = "Team slug")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Team deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    services::delete_team(db.pool(), &slug).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
