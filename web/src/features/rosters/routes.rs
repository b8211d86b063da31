use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{
    list_event_coaches, list_event_referees, sync_event_coaches, sync_event_referees,
};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Routes mounted under `/api/events`.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:slug/referees", put(sync_event_referees))
        .route("/:slug/coaches", put(sync_event_coaches))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:slug/referees", get(list_event_referees))
        .route("/:slug/coaches", get(list_event_coaches))
        .merge(protected)
}
