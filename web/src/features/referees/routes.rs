use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_referee, delete_referee, list_referees};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_referee))
        .route("/:id", delete(delete_referee))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_referees)).merge(protected)
}
