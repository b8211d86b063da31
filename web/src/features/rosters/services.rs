use std::collections::HashSet;

use sqlx::PgPool;
use storage::{
    dto::roster::{EventCoachEntry, EventRefereeEntry, SyncCoachesRequest, SyncRefereesRequest},
    error::{Result, StorageError},
    models::{Event, EventStatus},
    repository::{
        coach::CoachRepository, event::EventRepository, event_coach::EventCoachRosterStore,
        event_referee::EventRefereeRosterStore, referee::RefereeRepository, team::TeamRepository,
    },
    services::roster_sync::{DesiredMember, SyncOutcome, sync_associations},
};
use uuid::Uuid;

/// Rosters stay editable through the whole preliminary phase; only a
/// finished event is frozen.
fn ensure_roster_editable(event: &Event) -> Result<()> {
    if event.status == EventStatus::Finished {
        return Err(StorageError::Conflict(format!(
            "event '{}' is finished and its rosters can no longer change",
            event.slug
        )));
    }
    Ok(())
}

/// List the alive referee roster of an event
pub async fn list_event_referees(pool: &PgPool, slug: &str) -> Result<Vec<EventRefereeEntry>> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;

    let store = EventRefereeRosterStore::new(pool);
    store.list_for_event(event.event_id).await
}

/// Reconcile the event's referee roster to exactly the requested set
pub async fn sync_event_referees(
    pool: &PgPool,
    slug: &str,
    request: &SyncRefereesRequest,
) -> Result<SyncOutcome> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;
    ensure_roster_editable(&event)?;

    let requested: HashSet<Uuid> = request.referee_ids.iter().copied().collect();
    let known: HashSet<Uuid> = RefereeRepository::new(pool)
        .existing_ids(&request.referee_ids)
        .await?
        .into_iter()
        .collect();
    if let Some(missing) = requested.difference(&known).next() {
        return Err(StorageError::Validation(format!(
            "referee {} does not exist",
            missing
        )));
    }

    let desired: Vec<DesiredMember<()>> = request
        .referee_ids
        .iter()
        .map(|&referee_id| DesiredMember {
            child_id: referee_id,
            attrs: (),
        })
        .collect();

    let store = EventRefereeRosterStore::new(pool);
    sync_associations(&store, event.event_id, &desired).await
}

/// List the alive coach roster of an event, across all teams
pub async fn list_event_coaches(pool: &PgPool, slug: &str) -> Result<Vec<EventCoachEntry>> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;

    let store = EventCoachRosterStore::new(pool);
    store.list_for_event(event.event_id).await
}

/// Reconcile one team's coach roster at an event.
///
/// Candidate coach ids are pre-authorized against the owning team before the
/// reconciler runs, and the store is scoped so other teams' registrations
/// are invisible to the diff.
pub async fn sync_event_coaches(
    pool: &PgPool,
    slug: &str,
    request: &SyncCoachesRequest,
) -> Result<SyncOutcome> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;
    ensure_roster_editable(&event)?;

    let team = TeamRepository::new(pool).find_by_id(request.team_id).await?;

    let owned: HashSet<Uuid> = CoachRepository::new(pool)
        .ids_for_team(team.team_id)
        .await?
        .into_iter()
        .collect();
    for assignment in &request.coaches {
        if !owned.contains(&assignment.coach_id) {
            return Err(StorageError::Validation(format!(
                "coach {} does not belong to team '{}'",
                assignment.coach_id, team.slug
            )));
        }
    }

    let desired: Vec<DesiredMember<_>> = request
        .coaches
        .iter()
        .map(|assignment| DesiredMember {
            child_id: assignment.coach_id,
            attrs: assignment.role,
        })
        .collect();

    let store = EventCoachRosterStore::scoped_to_team(pool, team.team_id);
    sync_associations(&store, event.event_id, &desired).await
}
