use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_slug;
use crate::models::{Event, EventStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(max = 255))]
    pub venue: Option<String>,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}

impl CreateEventRequest {
    /// Cross-field validation the derive cannot express.
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if self.end_date < self.start_date {
            return Err("End date must be on or after start date");
        }
        Ok(())
    }
}

/// Admin lifecycle transition request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransitionEventRequest {
    pub status: EventStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub name: String,
    pub slug: String,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            name: event.name,
            slug: event.slug,
            venue: event.venue,
            city: event.city,
            start_date: event.start_date,
            end_date: event.end_date,
            status: event.status,
            created_at: event.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: (i32, u32, u32), end: (i32, u32, u32)) -> CreateEventRequest {
        CreateEventRequest {
            name: "Copa Norte".into(),
            slug: "copa-norte".into(),
            venue: None,
            city: None,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn end_date_must_not_precede_start_date() {
        assert!(request((2025, 10, 4), (2025, 10, 5)).validate_dates().is_ok());
        assert!(request((2025, 10, 4), (2025, 10, 4)).validate_dates().is_ok());
        assert!(request((2025, 10, 5), (2025, 10, 4)).validate_dates().is_err());
    }
}
