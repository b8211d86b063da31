use axum::Router;
use storage::Database;

use crate::middleware::auth::ApiKeys;

pub mod athletes;
pub mod coaches;
pub mod eligibility;
pub mod events;
pub mod referees;
pub mod registrations;
pub mod rosters;
pub mod teams;
pub mod tournaments;

pub fn api_router(api_keys: ApiKeys) -> Router<Database> {
    let event_routes = events::routes::routes(api_keys.clone())
        .merge(rosters::routes::routes(api_keys.clone()))
        .merge(tournaments::routes::event_scoped_routes(api_keys.clone()));

    let tournament_routes = tournaments::routes::routes(api_keys.clone()).merge(
        registrations::routes::tournament_scoped_routes(api_keys.clone()),
    );

    Router::new()
        .nest("/api/teams", teams::routes::routes(api_keys.clone()))
        .nest("/api/athletes", athletes::routes::routes(api_keys.clone()))
        .nest("/api/coaches", coaches::routes::routes(api_keys.clone()))
        .nest("/api/referees", referees::routes::routes(api_keys.clone()))
        .nest("/api/events", event_routes)
        .nest("/api/tournaments", tournament_routes)
        .nest("/api/registrations", registrations::routes::routes(api_keys))
        .nest("/api/eligibility", eligibility::routes::routes())
}
