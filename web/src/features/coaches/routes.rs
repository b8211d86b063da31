use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_coach, delete_coach, list_coaches};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_coach))
        .route("/:id", delete(delete_coach))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_coaches)).merge(protected)
}
