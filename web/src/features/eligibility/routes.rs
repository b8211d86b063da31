use axum::{Router, routing::get};
use storage::Database;

use super::handlers::resolve_eligibility;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(resolve_eligibility))
}
