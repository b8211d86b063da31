use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{AthleteDivision, Gender, TournamentDivision, WeightClass};

#[derive(Debug, Deserialize, IntoParams)]
pub struct EligibilityQuery {
    pub gender: Gender,
    pub birth_year: i32,
    pub division: TournamentDivision,
    /// Defaults to the current calendar year when omitted.
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EligibilityResponse {
    pub athlete_division: AthleteDivision,
    pub athlete_division_label: String,
    pub is_age_eligible: bool,
    /// Ascending weight order; empty only on gender mismatch, never for a
    /// valid query.
    pub eligible_weight_classes: Vec<WeightClass>,
}
