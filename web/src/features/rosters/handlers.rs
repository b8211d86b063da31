use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::roster::{
        EventCoachEntry, EventRefereeEntry, RosterSyncResponse, SyncCoachesRequest,
        SyncRefereesRequest,
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{slug}/referees",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "Current referee roster", body = Vec<EventRefereeEntry>),
        (status = 404, description = "Event not found")
    ),
    tag = "rosters"
)]
pub async fn list_event_referees(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<EventRefereeEntry>>, WebError> {
    let roster = services::list_event_referees(db.pool(), &slug).await?;

    Ok(Json(roster))
}

#[utoipa::path(
    put,
    path = "/api/events/{slug}/referees",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    request_body = SyncRefereesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Roster reconciled to the requested set", body = RosterSyncResponse),
        (status = 400, description = "Unknown referee in the requested set"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Event is finished")
    ),
    tag = "rosters"
)]
pub async fn sync_event_referees(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<SyncRefereesRequest>,
) -> Result<Response, WebError> {
    let outcome = services::sync_event_referees(db.pool(), &slug, &req).await?;

    Ok(Json(RosterSyncResponse::from(outcome)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{slug}/coaches",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "Current coach roster across all teams", body = Vec<EventCoachEntry>),
        (status = 404, description = "Event not found")
    ),
    tag = "rosters"
)]
pub async fn list_event_coaches(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<EventCoachEntry>>, WebError> {
    let roster = services::list_event_coaches(db.pool(), &slug).await?;

    Ok(Json(roster))
}

#[utoipa::path(
    put,
    path = "/api/events/{slug}/coaches",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    request_body = SyncCoachesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team's coach roster reconciled", body = RosterSyncResponse),
        (status = 400, description = "Coach not owned by the team"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event or team not found"),
        (status = 409, description = "Event is finished")
    ),
    tag = "rosters"
)]
pub async fn sync_event_coaches(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<SyncCoachesRequest>,
) -> Result<Response, WebError> {
    let outcome = services::sync_event_coaches(db.pool(), &slug, &req).await?;

    Ok(Json(RosterSyncResponse::from(outcome)).into_response())
}
