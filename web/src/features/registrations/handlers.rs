use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::registration::{
        BulkRegistrationRequest, BulkRegistrationResponse, CreateRegistrationRequest,
        RegistrationResponse, UpdateRegistrationRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/registrations",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "List the tournament's registrations", body = Vec<RegistrationResponse>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RegistrationResponse>>, WebError> {
    let registrations = services::list_registrations(db.pool(), id).await?;

    let response: Vec<RegistrationResponse> = registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/registrations",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    request_body = CreateRegistrationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Athlete registered successfully", body = RegistrationResponse),
        (status = 400, description = "Validation error or ineligible weight class"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament or athlete not found"),
        (status = 409, description = "Registrations closed or athlete already registered")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::create_registration(db.pool(), id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/registrations/bulk",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    request_body = BulkRegistrationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Batch processed; per-entry outcomes in the body", body = BulkRegistrationResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found"),
        (status = 409, description = "Registrations closed")
    ),
    tag = "registrations"
)]
pub async fn bulk_register(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<BulkRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome = services::bulk_register(db.pool(), id, &req).await?;

    Ok(Json(outcome).into_response())
}

#[utoipa::path(
    put,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    request_body = UpdateRegistrationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration updated successfully", body = RegistrationResponse),
        (status = 400, description = "Validation error or ineligible weight class"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Registrations closed")
    ),
    tag = "registrations"
)]
pub async fn update_registration(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::update_registration(db.pool(), id, &req).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Registration withdrawn successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Registrations closed")
    ),
    tag = "registrations"
)]
pub async fn delete_registration(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_registration(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
