use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        athlete::{AthleteListFilter, AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
        common::PaginatedResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    params(AthleteListFilter),
    responses(
        (status = 200, description = "Paginated athlete listing", body = PaginatedResponse<AthleteResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(filter): Query<AthleteListFilter>,
) -> Result<Response, WebError> {
    filter.pagination.validate().map_err(WebError::BadRequest)?;

    let (athletes, total_items) = services::list_athletes(db.pool(), &filter).await?;

    let response = PaginatedResponse::new(
        athletes.into_iter().map(AthleteResponse::from).collect(),
        filter.pagination.page,
        filter.pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "DNI already registered within the team")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found"),
        (status = 409, description = "DNI already registered within the team")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::update_athlete(db.pool(), id, &req).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
