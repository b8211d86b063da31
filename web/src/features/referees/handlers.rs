use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::referee::{CreateRefereeRequest, RefereeResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/referees",
    responses(
        (status = 200, description = "List referees successfully", body = Vec<RefereeResponse>)
    ),
    tag = "referees"
)]
pub async fn list_referees(
    State(db): State<Database>,
) -> Result<Json<Vec<RefereeResponse>>, WebError> {
    let referees = services::list_referees(db.pool()).await?;

    let response: Vec<RefereeResponse> = referees.into_iter().map(RefereeResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/referees",
    request_body = CreateRefereeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Referee created successfully", body = RefereeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "License number already exists")
    ),
    tag = "referees"
)]
pub async fn create_referee(
    State(db): State<Database>,
    Json(req): Json<CreateRefereeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let referee = services::create_referee(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(RefereeResponse::from(referee))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/referees/{id}",
    params(
        ("id" = Uuid, Path, description = "Referee id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Referee deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Referee not found")
    ),
    tag = "referees"
)]
pub async fn delete_referee(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_referee(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
