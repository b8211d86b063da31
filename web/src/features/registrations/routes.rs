use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    bulk_register, create_registration, delete_registration, list_registrations,
    update_registration,
};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Routes mounted under `/api/tournaments`.
pub fn tournament_scoped_routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:id/registrations", post(create_registration))
        .route("/:id/registrations/bulk", post(bulk_register))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:id/registrations", get(list_registrations))
        .merge(protected)
}

/// Routes mounted under `/api/registrations`.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:id", put(update_registration))
        .route("/:id", delete(delete_registration))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
