use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Admin-driven lifecycle of a federation event.
///
/// Transitions move forward through the preliminary phase; the only backward
/// step is reopening a closed preliminary before the event is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "event_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    PreliminaryOpen,
    PreliminaryClosed,
    Finished,
}

impl EventStatus {
    pub fn can_transition_to(self, next: EventStatus) -> bool {
        use EventStatus::*;
        matches!(
            (self, next),
            (Draft, PreliminaryOpen)
                | (PreliminaryOpen, PreliminaryClosed)
                | (PreliminaryClosed, PreliminaryOpen)
                | (PreliminaryClosed, Finished)
        )
    }

    /// Registrations may only be created or edited during the open preliminary.
    pub fn accepts_registrations(self) -> bool {
        self == EventStatus::PreliminaryOpen
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventStatus::Draft => "draft",
            EventStatus::PreliminaryOpen => "preliminary_open",
            EventStatus::PreliminaryClosed => "preliminary_closed",
            EventStatus::Finished => "finished",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub slug: String,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::EventStatus::*;

    #[test]
    fn lifecycle_moves_forward() {
        assert!(Draft.can_transition_to(PreliminaryOpen));
        assert!(PreliminaryOpen.can_transition_to(PreliminaryClosed));
        assert!(PreliminaryClosed.can_transition_to(Finished));
    }

    #[test]
    fn closed_preliminary_can_reopen() {
        assert!(PreliminaryClosed.can_transition_to(PreliminaryOpen));
    }

    #[test]
    fn no_skipping_or_rewinding() {
        assert!(!Draft.can_transition_to(PreliminaryClosed));
        assert!(!Draft.can_transition_to(Finished));
        assert!(!PreliminaryOpen.can_transition_to(Draft));
        assert!(!PreliminaryOpen.can_transition_to(Finished));
        assert!(!Finished.can_transition_to(PreliminaryOpen));
        assert!(!Finished.can_transition_to(Draft));
    }

    #[test]
    fn only_open_preliminary_accepts_registrations() {
        assert!(PreliminaryOpen.accepts_registrations());
        assert!(!Draft.accepts_registrations());
        assert!(!PreliminaryClosed.accepts_registrations());
        assert!(!Finished.accepts_registrations());
    }
}
