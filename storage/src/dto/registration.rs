use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Registration, WeightClass};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    pub athlete_id: Uuid,

    pub weight_class: WeightClass,

    #[validate(custom(function = "validate_opener"))]
    pub opener_squat: Option<Decimal>,

    #[validate(custom(function = "validate_opener"))]
    pub opener_bench: Option<Decimal>,

    #[validate(custom(function = "validate_opener"))]
    pub opener_deadlift: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRegistrationRequest {
    pub weight_class: Option<WeightClass>,

    #[validate(custom(function = "validate_opener"))]
    pub opener_squat: Option<Decimal>,

    #[validate(custom(function = "validate_opener"))]
    pub opener_bench: Option<Decimal>,

    #[validate(custom(function = "validate_opener"))]
    pub opener_deadlift: Option<Decimal>,
}

/// Admin bulk entry: every row is attempted, each failure reported per row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkRegistrationRequest {
    #[validate(length(min = 1, message = "At least one entry is required"))]
    #[validate(nested)]
    pub entries: Vec<CreateRegistrationRequest>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RejectedRegistration {
    pub athlete_id: Uuid,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BulkRegistrationResponse {
    pub registered: Vec<RegistrationResponse>,
    pub rejected: Vec<RejectedRegistration>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub tournament_id: Uuid,
    pub athlete_id: Uuid,
    pub weight_class: WeightClass,
    pub opener_squat: Option<Decimal>,
    pub opener_bench: Option<Decimal>,
    pub opener_deadlift: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            registration_id: registration.registration_id,
            tournament_id: registration.tournament_id,
            athlete_id: registration.athlete_id,
            weight_class: registration.weight_class,
            opener_squat: registration.opener_squat,
            opener_bench: registration.opener_bench,
            opener_deadlift: registration.opener_deadlift,
            created_at: registration.created_at,
        }
    }
}

/// Openers load the bar in 2.5 kg steps within the plate range the platform
/// can actually hold.
fn validate_opener(weight: &Decimal) -> Result<(), validator::ValidationError> {
    let step = Decimal::new(25, 1);
    if *weight < step || *weight > Decimal::from(500) || !(*weight % step).is_zero() {
        return Err(validator::ValidationError::new("invalid_opener"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_steps() {
        for ok in ["2.5", "60", "182.5", "500"] {
            let weight: Decimal = ok.parse().unwrap();
            assert!(validate_opener(&weight).is_ok(), "{}", ok);
        }
        for bad in ["0", "-60", "61.25", "502.5", "1000"] {
            let weight: Decimal = bad.parse().unwrap();
            assert!(validate_opener(&weight).is_err(), "{}", bad);
        }
    }
}
