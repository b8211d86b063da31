use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Competition gender as recorded on the athlete's federation license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    #[sqlx(rename = "M")]
    #[serde(rename = "M")]
    Male,
    #[sqlx(rename = "F")]
    #[serde(rename = "F")]
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
        }
    }
}
