use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_event, get_event, list_events, transition_event};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:slug/status", post(transition_event))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/:slug", get(get_event))
        .merge(protected)
}
