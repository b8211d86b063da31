use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_tournament, delete_tournament, list_tournaments};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Routes mounted under `/api/events`.
pub fn event_scoped_routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:slug/tournaments", post(create_tournament))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:slug/tournaments", get(list_tournaments))
        .merge(protected)
}

/// Routes mounted under `/api/tournaments`.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:id", delete(delete_tournament))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
