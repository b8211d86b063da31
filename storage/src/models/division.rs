use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Competitive division a tournament is announced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tournament_division", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TournamentDivision {
    Open,
    Teen,
    Subjunior,
    Junior,
    Masters,
}

/// Age band an athlete actually competes in within a tournament division.
///
/// Derived from the tournament division and the athlete's birth year by
/// `services::eligibility`; never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "athlete_division", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AthleteDivision {
    Teen,
    Subjunior,
    Junior,
    Open,
    Masters1,
    Masters2,
    Masters3,
}

impl AthleteDivision {
    /// Youth bands share the extra lightweight classes.
    pub fn is_youth(self) -> bool {
        matches!(
            self,
            AthleteDivision::Teen | AthleteDivision::Subjunior | AthleteDivision::Junior
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            AthleteDivision::Teen => "Teen",
            AthleteDivision::Subjunior => "Sub-Junior",
            AthleteDivision::Junior => "Junior",
            AthleteDivision::Open => "Open",
            AthleteDivision::Masters1 => "Masters I",
            AthleteDivision::Masters2 => "Masters II",
            AthleteDivision::Masters3 => "Masters III",
        }
    }
}

impl std::fmt::Display for TournamentDivision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TournamentDivision::Open => "open",
            TournamentDivision::Teen => "teen",
            TournamentDivision::Subjunior => "subjunior",
            TournamentDivision::Junior => "junior",
            TournamentDivision::Masters => "masters",
        };
        write!(f, "{}", name)
    }
}
