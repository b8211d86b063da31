use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::WeightClass;

/// Links an athlete into a tournament under a validated weight class,
/// carrying the announced opener attempts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub tournament_id: Uuid,
    pub athlete_id: Uuid,
    pub weight_class: WeightClass,
    pub opener_squat: Option<Decimal>,
    pub opener_bench: Option<Decimal>,
    pub opener_deadlift: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
