use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use storage::dto::eligibility::{EligibilityQuery, EligibilityResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/eligibility",
    params(EligibilityQuery),
    responses(
        (status = 200, description = "Resolved division and eligible weight classes", body = EligibilityResponse),
        (status = 400, description = "Unknown enum value or implausible birth year")
    ),
    tag = "eligibility"
)]
pub async fn resolve_eligibility(
    Query(query): Query<EligibilityQuery>,
) -> Result<Response, WebError> {
    let resolution = services::resolve(&query)?;

    Ok(Json(resolution).into_response())
}
