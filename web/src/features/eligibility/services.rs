use chrono::{Datelike, Utc};
use storage::{
    dto::eligibility::{EligibilityQuery, EligibilityResponse},
    error::Result,
    services::eligibility,
};

/// Resolve division and weight-class eligibility for a prospective entry.
/// Pure computation; no persistence involved.
pub fn resolve(query: &EligibilityQuery) -> Result<EligibilityResponse> {
    let reference_year = query.reference_year.unwrap_or_else(|| Utc::now().year());

    eligibility::resolve_eligibility(query.gender, query.birth_year, query.division, reference_year)
}
