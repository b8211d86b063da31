use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::tournament::{CreateTournamentRequest, TournamentResponse},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{slug}/tournaments",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "List the event's tournaments", body = Vec<TournamentResponse>),
        (status = 404, description = "Event not found")
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<TournamentResponse>>, WebError> {
    let tournaments = services::list_tournaments(db.pool(), &slug).await?;

    let response: Vec<TournamentResponse> = tournaments
        .into_iter()
        .map(TournamentResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/events/{slug}/tournaments",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    request_body = CreateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Tournament created successfully", body = TournamentResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Bracket already exists for the event")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<Response, WebError> {
    let tournament = services::create_tournament(db.pool(), &slug, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(TournamentResponse::from(tournament)),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Tournament deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_tournament(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
