use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{CreateEventRequest, EventResponse, TransitionEventRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events successfully", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/events/{slug}",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let event = services::get_event_by_slug(db.pool(), &slug).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created successfully", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{slug}/status",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    request_body = TransitionEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event transitioned successfully", body = EventResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Transition not allowed from the current status")
    ),
    tag = "events"
)]
pub async fn transition_event(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<TransitionEventRequest>,
) -> Result<Response, WebError> {
    let event = services::transition_event(db.pool(), &slug, req.status).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}
