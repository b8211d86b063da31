use crate::error::{Result, StorageError};
use crate::models::{Athlete, Event, TournamentDivision, WeightClass};

use super::eligibility;

/// Registration mutations are only accepted while the owning event keeps its
/// preliminary phase open.
pub fn ensure_event_accepts_registrations(event: &Event) -> Result<()> {
    if event.status.accepts_registrations() {
        Ok(())
    } else {
        Err(StorageError::Conflict(format!(
            "event '{}' is {} and does not accept registrations",
            event.slug, event.status
        )))
    }
}

/// Full gate for a single registration entry: age eligibility plus membership
/// of the chosen weight class in the athlete's eligible set.
pub fn validate_registration_entry(
    athlete: &Athlete,
    division: TournamentDivision,
    weight_class: WeightClass,
    reference_year: i32,
) -> Result<()> {
    if weight_class.gender() != athlete.gender {
        return Err(StorageError::Validation(format!(
            "weight class {:?} does not match athlete gender {}",
            weight_class, athlete.gender
        )));
    }

    if !eligibility::is_age_eligible(division, athlete.birth_year, reference_year)? {
        return Err(StorageError::Validation(format!(
            "athlete born {} is not age-eligible for the {} division",
            athlete.birth_year, division
        )));
    }

    let eligible = eligibility::eligible_weight_classes(
        athlete.gender,
        athlete.birth_year,
        division,
        reference_year,
    )?;
    if !eligible.contains(&weight_class) {
        return Err(StorageError::Validation(format!(
            "weight class {:?} is not eligible for the {} division",
            weight_class, division
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::models::{EventStatus, Gender};

    const REF_YEAR: i32 = 2025;

    fn athlete(gender: Gender, birth_year: i32) -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            first_name: "Marta".into(),
            last_name: "Vidal".into(),
            dni: "11222333X".into(),
            gender,
            birth_year,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn event(status: EventStatus) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            name: "Regional Championship".into(),
            slug: "regional-championship".into(),
            venue: None,
            city: None,
            start_date: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            status,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn closed_event_rejects_registrations_with_conflict() {
        for status in [
            EventStatus::Draft,
            EventStatus::PreliminaryClosed,
            EventStatus::Finished,
        ] {
            let err = ensure_event_accepts_registrations(&event(status)).unwrap_err();
            assert!(matches!(err, StorageError::Conflict(_)), "{:?}", status);
        }
        assert!(ensure_event_accepts_registrations(&event(EventStatus::PreliminaryOpen)).is_ok());
    }

    #[test]
    fn accepts_matching_class_for_eligible_athlete() {
        let lifter = athlete(Gender::Female, 1995);
        validate_registration_entry(
            &lifter,
            TournamentDivision::Open,
            WeightClass::FCat60,
            REF_YEAR,
        )
        .unwrap();
    }

    #[test]
    fn rejects_cross_gender_weight_class() {
        let lifter = athlete(Gender::Female, 1995);
        let err = validate_registration_entry(
            &lifter,
            TournamentDivision::Open,
            WeightClass::MCat75,
            REF_YEAR,
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn rejects_age_ineligible_athlete() {
        // A 30-year-old in a teen tournament.
        let lifter = athlete(Gender::Male, REF_YEAR - 30);
        let err = validate_registration_entry(
            &lifter,
            TournamentDivision::Teen,
            WeightClass::MCat75,
            REF_YEAR,
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn rejects_youth_only_class_for_open_band_athlete() {
        let lifter = athlete(Gender::Female, REF_YEAR - 30);
        let err = validate_registration_entry(
            &lifter,
            TournamentDivision::Open,
            WeightClass::FCat44,
            REF_YEAR,
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }
}
