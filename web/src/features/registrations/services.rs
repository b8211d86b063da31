use chrono::{Datelike, Utc};
use sqlx::PgPool;
use storage::{
    dto::registration::{
        BulkRegistrationRequest, BulkRegistrationResponse, CreateRegistrationRequest,
        RegistrationResponse, RejectedRegistration, UpdateRegistrationRequest,
    },
    error::{Result, StorageError},
    models::{Event, Registration, Tournament},
    repository::{
        athlete::AthleteRepository, event::EventRepository, registration::RegistrationRepository,
        tournament::TournamentRepository,
    },
    services::registration_rules,
};
use uuid::Uuid;

/// Eligibility is always evaluated against the year the request is handled
/// in; the resolver itself never reads a clock.
fn current_year() -> i32 {
    Utc::now().year()
}

async fn load_tournament_context(
    pool: &PgPool,
    tournament_id: Uuid,
) -> Result<(Tournament, Event)> {
    let tournament = TournamentRepository::new(pool).find_by_id(tournament_id).await?;
    let event = EventRepository::new(pool).find_by_id(tournament.event_id).await?;
    Ok((tournament, event))
}

/// List a tournament's alive registrations
pub async fn list_registrations(pool: &PgPool, tournament_id: Uuid) -> Result<Vec<Registration>> {
    TournamentRepository::new(pool).find_by_id(tournament_id).await?;

    let repo = RegistrationRepository::new(pool);
    repo.list_for_tournament(tournament_id).await
}

/// Register an athlete into a tournament, enforcing the lifecycle and
/// eligibility gates
pub async fn create_registration(
    pool: &PgPool,
    tournament_id: Uuid,
    request: &CreateRegistrationRequest,
) -> Result<Registration> {
    let (tournament, event) = load_tournament_context(pool, tournament_id).await?;
    registration_rules::ensure_event_accepts_registrations(&event)?;

    let athlete = AthleteRepository::new(pool).find_by_id(request.athlete_id).await?;
    registration_rules::validate_registration_entry(
        &athlete,
        tournament.division,
        request.weight_class,
        current_year(),
    )?;

    RegistrationRepository::new(pool).create(tournament_id, request).await
}

/// Bulk entry: every row is attempted independently; per-row failures are
/// reported back instead of aborting the batch.
pub async fn bulk_register(
    pool: &PgPool,
    tournament_id: Uuid,
    request: &BulkRegistrationRequest,
) -> Result<BulkRegistrationResponse> {
    let (tournament, event) = load_tournament_context(pool, tournament_id).await?;
    registration_rules::ensure_event_accepts_registrations(&event)?;

    let reference_year = current_year();
    let athletes = AthleteRepository::new(pool);
    let registrations = RegistrationRepository::new(pool);

    let mut registered = Vec::new();
    let mut rejected = Vec::new();

    for entry in &request.entries {
        let outcome = async {
            let athlete = athletes.find_by_id(entry.athlete_id).await?;
            registration_rules::validate_registration_entry(
                &athlete,
                tournament.division,
                entry.weight_class,
                reference_year,
            )?;
            registrations.create(tournament_id, entry).await
        }
        .await;

        match outcome {
            Ok(registration) => registered.push(RegistrationResponse::from(registration)),
            Err(StorageError::NotFound) => rejected.push(RejectedRegistration {
                athlete_id: entry.athlete_id,
                reason: "Athlete not found".to_string(),
            }),
            Err(StorageError::Validation(reason)) | Err(StorageError::Conflict(reason)) => {
                rejected.push(RejectedRegistration {
                    athlete_id: entry.athlete_id,
                    reason,
                })
            }
            Err(other) => return Err(other),
        }
    }

    Ok(BulkRegistrationResponse { registered, rejected })
}

/// Update a registration, re-validating the weight class against the
/// athlete's eligible set
pub async fn update_registration(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateRegistrationRequest,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let (tournament, event) = load_tournament_context(pool, existing.tournament_id).await?;
    registration_rules::ensure_event_accepts_registrations(&event)?;

    let weight_class = request.weight_class.unwrap_or(existing.weight_class);
    let athlete = AthleteRepository::new(pool).find_by_id(existing.athlete_id).await?;
    registration_rules::validate_registration_entry(
        &athlete,
        tournament.division,
        weight_class,
        current_year(),
    )?;

    repo.update(id, &existing, request).await
}

/// Withdraw a registration while the preliminary phase is still open
pub async fn delete_registration(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = RegistrationRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let (_, event) = load_tournament_context(pool, existing.tournament_id).await?;
    registration_rules::ensure_event_accepts_registrations(&event)?;

    repo.soft_delete(id).await
}
