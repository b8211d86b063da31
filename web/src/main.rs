use anyhow::Context;
use axum::{Json, Router, routing::get};
use serde_json::json;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::create_team,
        features::teams::handlers::delete_team,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::coaches::handlers::list_coaches,
        features::coaches::handlers::create_coach,
        features::coaches::handlers::delete_coach,
        features::referees::handlers::list_referees,
        features::referees::handlers::create_referee,
        features::referees::handlers::delete_referee,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::transition_event,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::delete_tournament,
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::bulk_register,
        features::registrations::handlers::update_registration,
        features::registrations::handlers::delete_registration,
        features::rosters::handlers::list_event_referees,
        features::rosters::handlers::sync_event_referees,
        features::rosters::handlers::list_event_coaches,
        features::rosters::handlers::sync_event_coaches,
        features::eligibility::handlers::resolve_eligibility,
    ),
    components(
        schemas(
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::TeamResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::coach::CreateCoachRequest,
            storage::dto::coach::CoachResponse,
            storage::dto::referee::CreateRefereeRequest,
            storage::dto::referee::RefereeResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::TransitionEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::TournamentResponse,
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::UpdateRegistrationRequest,
            storage::dto::registration::BulkRegistrationRequest,
            storage::dto::registration::BulkRegistrationResponse,
            storage::dto::registration::RejectedRegistration,
            storage::dto::registration::RegistrationResponse,
            storage::dto::roster::SyncRefereesRequest,
            storage::dto::roster::SyncCoachesRequest,
            storage::dto::roster::CoachAssignment,
            storage::dto::roster::RosterSyncResponse,
            storage::dto::roster::EventRefereeEntry,
            storage::dto::roster::EventCoachEntry,
            storage::dto::eligibility::EligibilityResponse,
            storage::dto::common::PaginationMeta,
            storage::models::Gender,
            storage::models::TournamentDivision,
            storage::models::AthleteDivision,
            storage::models::WeightClass,
            storage::models::EventStatus,
            storage::models::Modality,
            storage::models::Equipment,
            storage::models::CoachRole,
        )
    ),
    tags(
        (name = "teams", description = "Team management endpoints"),
        (name = "athletes", description = "Athlete management endpoints"),
        (name = "coaches", description = "Coach management endpoints"),
        (name = "referees", description = "Referee management endpoints"),
        (name = "events", description = "Federation event endpoints"),
        (name = "tournaments", description = "Event tournament brackets"),
        (name = "registrations", description = "Tournament registration endpoints"),
        (name = "rosters", description = "Event roster reconciliation endpoints"),
        (name = "eligibility", description = "Division and weight-class eligibility"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Federation Meet API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(healthcheck))
        .merge(features::api_router(api_keys).with_state(db))
        .layer(CorsLayer::permissive());

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app).await?;

    Ok(())
}
