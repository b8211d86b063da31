use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_team, delete_team, get_team, list_teams};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_team))
        .route("/:slug", delete(delete_team))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_teams))
        .route("/:slug", get(get_team))
        .merge(protected)
}
