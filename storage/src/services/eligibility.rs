use crate::dto::eligibility::EligibilityResponse;
use crate::error::{Result, StorageError};
use crate::models::{AthleteDivision, Gender, TournamentDivision, WeightClass};

/// Birth years before this are treated as data-entry errors.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Age as counted by the federation rulebook: calendar-year difference only,
/// no birth month/day precision. The reference year is always injected so the
/// computation stays deterministic under test.
fn competition_age(birth_year: i32, reference_year: i32) -> Result<i32> {
    if !(MIN_BIRTH_YEAR..=reference_year).contains(&birth_year) {
        return Err(StorageError::Validation(format!(
            "birth year {} must be between {} and {}",
            birth_year, MIN_BIRTH_YEAR, reference_year
        )));
    }
    Ok(reference_year - birth_year)
}

/// Maps the tournament's announced division plus the athlete's age to the
/// band the athlete actually competes in. Total over every valid birth year:
/// age limits are enforced separately by `is_age_eligible`.
///
/// All band boundaries are inclusive on the boundary year.
pub fn resolve_athlete_division(
    division: TournamentDivision,
    birth_year: i32,
    reference_year: i32,
) -> Result<AthleteDivision> {
    let age = competition_age(birth_year, reference_year)?;

    let resolved = match division {
        TournamentDivision::Open => match age {
            ..=18 => AthleteDivision::Subjunior,
            19..=23 => AthleteDivision::Junior,
            24..=39 => AthleteDivision::Open,
            40..=49 => AthleteDivision::Masters1,
            50..=59 => AthleteDivision::Masters2,
            _ => AthleteDivision::Masters3,
        },
        TournamentDivision::Teen => AthleteDivision::Teen,
        TournamentDivision::Subjunior => AthleteDivision::Subjunior,
        TournamentDivision::Junior => {
            if age <= 18 {
                AthleteDivision::Subjunior
            } else {
                AthleteDivision::Junior
            }
        }
        TournamentDivision::Masters => match age {
            ..=49 => AthleteDivision::Masters1,
            50..=59 => AthleteDivision::Masters2,
            _ => AthleteDivision::Masters3,
        },
    };

    Ok(resolved)
}

/// Hard age gate applied before any registration entry is accepted.
pub fn is_age_eligible(
    division: TournamentDivision,
    birth_year: i32,
    reference_year: i32,
) -> Result<bool> {
    let age = competition_age(birth_year, reference_year)?;

    let eligible = match division {
        TournamentDivision::Open => age >= 14,
        TournamentDivision::Teen => (13..=19).contains(&age),
        TournamentDivision::Subjunior => (14..=18).contains(&age),
        TournamentDivision::Junior => (14..=23).contains(&age),
        TournamentDivision::Masters => age >= 40,
    };

    Ok(eligible)
}

/// Weight classes the athlete may register under, ascending weight order.
///
/// Only classes matching the athlete's gender are returned; the lightest
/// class of each gender is reserved for youth bands. Recomputed fresh on
/// every call, never cached.
pub fn eligible_weight_classes(
    gender: Gender,
    birth_year: i32,
    division: TournamentDivision,
    reference_year: i32,
) -> Result<Vec<WeightClass>> {
    let athlete_division = resolve_athlete_division(division, birth_year, reference_year)?;

    let classes = WeightClass::classes_for(gender)
        .iter()
        .copied()
        .filter(|class| !class.is_youth_only() || athlete_division.is_youth())
        .collect();

    Ok(classes)
}

/// Bundles the three resolver results for registration forms and list views.
pub fn resolve_eligibility(
    gender: Gender,
    birth_year: i32,
    division: TournamentDivision,
    reference_year: i32,
) -> Result<EligibilityResponse> {
    let athlete_division = resolve_athlete_division(division, birth_year, reference_year)?;

    Ok(EligibilityResponse {
        athlete_division,
        athlete_division_label: athlete_division.label().to_string(),
        is_age_eligible: is_age_eligible(division, birth_year, reference_year)?,
        eligible_weight_classes: eligible_weight_classes(
            gender,
            birth_year,
            division,
            reference_year,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AthleteDivision as Ad;
    use crate::models::TournamentDivision as Td;

    const REF_YEAR: i32 = 2025;

    fn born(age: i32) -> i32 {
        REF_YEAR - age
    }

    #[test]
    fn rejects_implausible_birth_years() {
        for birth_year in [1899, REF_YEAR + 1, 2500] {
            let err = resolve_athlete_division(Td::Open, birth_year, REF_YEAR).unwrap_err();
            assert!(matches!(err, StorageError::Validation(_)), "{}", birth_year);
            let err = is_age_eligible(Td::Open, birth_year, REF_YEAR).unwrap_err();
            assert!(matches!(err, StorageError::Validation(_)), "{}", birth_year);
        }
    }

    /// Reference table for boundary years, one row per pinned band edge.
    /// Boundaries are inclusive on the boundary year.
    #[test]
    fn age_boundaries_match_reference_table() {
        #[rustfmt::skip]
        let table: &[(Td, i32, bool, Ad)] = &[
            // division, age, eligible, resolved band
            (Td::Open,      13, false, Ad::Subjunior),
            (Td::Open,      14, true,  Ad::Subjunior),
            (Td::Open,      18, true,  Ad::Subjunior),
            (Td::Open,      19, true,  Ad::Junior),
            (Td::Open,      23, true,  Ad::Junior),
            (Td::Open,      24, true,  Ad::Open),
            (Td::Open,      39, true,  Ad::Open),
            (Td::Open,      40, true,  Ad::Masters1),
            (Td::Open,      49, true,  Ad::Masters1),
            (Td::Open,      50, true,  Ad::Masters2),
            (Td::Open,      59, true,  Ad::Masters2),
            (Td::Open,      60, true,  Ad::Masters3),
            (Td::Open,      75, true,  Ad::Masters3),
            (Td::Teen,      12, false, Ad::Teen),
            (Td::Teen,      13, true,  Ad::Teen),
            (Td::Teen,      19, true,  Ad::Teen),
            (Td::Teen,      20, false, Ad::Teen),
            (Td::Subjunior, 13, false, Ad::Subjunior),
            (Td::Subjunior, 14, true,  Ad::Subjunior),
            (Td::Subjunior, 18, true,  Ad::Subjunior),
            (Td::Subjunior, 19, false, Ad::Subjunior),
            (Td::Junior,    13, false, Ad::Subjunior),
            (Td::Junior,    14, true,  Ad::Subjunior),
            (Td::Junior,    18, true,  Ad::Subjunior),
            (Td::Junior,    19, true,  Ad::Junior),
            (Td::Junior,    23, true,  Ad::Junior),
            (Td::Junior,    24, false, Ad::Junior),
            (Td::Masters,   39, false, Ad::Masters1),
            (Td::Masters,   40, true,  Ad::Masters1),
            (Td::Masters,   49, true,  Ad::Masters1),
            (Td::Masters,   50, true,  Ad::Masters2),
            (Td::Masters,   59, true,  Ad::Masters2),
            (Td::Masters,   60, true,  Ad::Masters3),
        ];

        for &(division, age, eligible, band) in table {
            assert_eq!(
                is_age_eligible(division, born(age), REF_YEAR).unwrap(),
                eligible,
                "eligibility for age {} in {:?}",
                age,
                division
            );
            assert_eq!(
                resolve_athlete_division(division, born(age), REF_YEAR).unwrap(),
                band,
                "band for age {} in {:?}",
                age,
                division
            );
        }
    }

    #[test]
    fn resolution_is_total_even_when_ineligible() {
        // A 70-year-old in a teen tournament is rejected by the gate but the
        // division mapping still answers.
        assert!(!is_age_eligible(Td::Teen, born(70), REF_YEAR).unwrap());
        assert_eq!(
            resolve_athlete_division(Td::Teen, born(70), REF_YEAR).unwrap(),
            Ad::Teen
        );
    }

    #[test]
    fn weight_classes_match_gender_prefix_and_are_ascending() {
        for division in [Td::Open, Td::Teen, Td::Subjunior, Td::Junior, Td::Masters] {
            for (gender, full_list) in [
                (Gender::Female, &WeightClass::FEMALE[..]),
                (Gender::Male, &WeightClass::MALE[..]),
            ] {
                for age in [15, 21, 30, 45, 65] {
                    let classes =
                        eligible_weight_classes(gender, born(age), division, REF_YEAR).unwrap();

                    assert!(!classes.is_empty(), "{:?}/{:?}/age {}", gender, division, age);
                    assert!(classes.iter().all(|c| c.gender() == gender));

                    // Ascending order == subsequence of the configured table.
                    let mut cursor = full_list.iter();
                    for class in &classes {
                        assert!(
                            cursor.any(|c| c == class),
                            "{:?} out of order for {:?}/{:?}",
                            class,
                            gender,
                            division
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn youth_only_class_is_dropped_for_senior_bands() {
        let senior = eligible_weight_classes(Gender::Female, born(30), Td::Open, REF_YEAR).unwrap();
        assert!(!senior.contains(&WeightClass::FCat44));
        assert_eq!(senior.len(), WeightClass::FEMALE.len() - 1);

        let junior = eligible_weight_classes(Gender::Male, born(20), Td::Junior, REF_YEAR).unwrap();
        assert!(junior.contains(&WeightClass::MCat52));
        assert_eq!(junior.len(), WeightClass::MALE.len());
    }

    #[test]
    fn teen_girl_born_2010_gets_full_female_list() {
        // Fifteen-year-old in a teen tournament, evaluated in 2025.
        let resolution = resolve_eligibility(Gender::Female, 2010, Td::Teen, 2025).unwrap();

        assert!(resolution.is_age_eligible);
        assert_eq!(resolution.athlete_division, Ad::Teen);
        assert_eq!(resolution.eligible_weight_classes, WeightClass::FEMALE.to_vec());
    }
}
