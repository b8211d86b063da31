use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Gender;

/// Gender-partitioned body-weight bracket an athlete registers under.
///
/// The per-gender orderings below are federation configuration data: the
/// declaration order of `FEMALE` and `MALE` is ascending weight order and the
/// eligibility service relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "weight_class")]
pub enum WeightClass {
    #[sqlx(rename = "F_CAT44")]
    #[serde(rename = "F_CAT44")]
    FCat44,
    #[sqlx(rename = "F_CAT48")]
    #[serde(rename = "F_CAT48")]
    FCat48,
    #[sqlx(rename = "F_CAT52")]
    #[serde(rename = "F_CAT52")]
    FCat52,
    #[sqlx(rename = "F_CAT56")]
    #[serde(rename = "F_CAT56")]
    FCat56,
    #[sqlx(rename = "F_CAT60")]
    #[serde(rename = "F_CAT60")]
    FCat60,
    #[sqlx(rename = "F_CAT67")]
    #[serde(rename = "F_CAT67")]
    FCat67,
    #[sqlx(rename = "F_CAT75")]
    #[serde(rename = "F_CAT75")]
    FCat75,
    #[sqlx(rename = "F_CAT82")]
    #[serde(rename = "F_CAT82")]
    FCat82,
    #[sqlx(rename = "F_CAT90")]
    #[serde(rename = "F_CAT90")]
    FCat90,
    #[sqlx(rename = "F_CATHW")]
    #[serde(rename = "F_CATHW")]
    FCatHw,
    #[sqlx(rename = "M_CAT52")]
    #[serde(rename = "M_CAT52")]
    MCat52,
    #[sqlx(rename = "M_CAT56")]
    #[serde(rename = "M_CAT56")]
    MCat56,
    #[sqlx(rename = "M_CAT60")]
    #[serde(rename = "M_CAT60")]
    MCat60,
    #[sqlx(rename = "M_CAT67")]
    #[serde(rename = "M_CAT67")]
    MCat67,
    #[sqlx(rename = "M_CAT75")]
    #[serde(rename = "M_CAT75")]
    MCat75,
    #[sqlx(rename = "M_CAT82")]
    #[serde(rename = "M_CAT82")]
    MCat82,
    #[sqlx(rename = "M_CAT90")]
    #[serde(rename = "M_CAT90")]
    MCat90,
    #[sqlx(rename = "M_CAT100")]
    #[serde(rename = "M_CAT100")]
    MCat100,
    #[sqlx(rename = "M_CAT110")]
    #[serde(rename = "M_CAT110")]
    MCat110,
    #[sqlx(rename = "M_CAT125")]
    #[serde(rename = "M_CAT125")]
    MCat125,
    #[sqlx(rename = "M_CATHW")]
    #[serde(rename = "M_CATHW")]
    MCatHw,
}

impl WeightClass {
    pub const FEMALE: [WeightClass; 10] = [
        WeightClass::FCat44,
        WeightClass::FCat48,
        WeightClass::FCat52,
        WeightClass::FCat56,
        WeightClass::FCat60,
        WeightClass::FCat67,
        WeightClass::FCat75,
        WeightClass::FCat82,
        WeightClass::FCat90,
        WeightClass::FCatHw,
    ];

    pub const MALE: [WeightClass; 11] = [
        WeightClass::MCat52,
        WeightClass::MCat56,
        WeightClass::MCat60,
        WeightClass::MCat67,
        WeightClass::MCat75,
        WeightClass::MCat82,
        WeightClass::MCat90,
        WeightClass::MCat100,
        WeightClass::MCat110,
        WeightClass::MCat125,
        WeightClass::MCatHw,
    ];

    /// All classes for one gender, ascending weight order.
    pub fn classes_for(gender: Gender) -> &'static [WeightClass] {
        match gender {
            Gender::Female => &Self::FEMALE,
            Gender::Male => &Self::MALE,
        }
    }

    pub fn gender(self) -> Gender {
        match self {
            WeightClass::FCat44
            | WeightClass::FCat48
            | WeightClass::FCat52
            | WeightClass::FCat56
            | WeightClass::FCat60
            | WeightClass::FCat67
            | WeightClass::FCat75
            | WeightClass::FCat82
            | WeightClass::FCat90
            | WeightClass::FCatHw => Gender::Female,
            _ => Gender::Male,
        }
    }

    /// The lightest class of each gender is reserved for youth divisions.
    pub fn is_youth_only(self) -> bool {
        matches!(self, WeightClass::FCat44 | WeightClass::MCat52)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tables_are_gender_partitioned() {
        assert!(WeightClass::FEMALE.iter().all(|c| c.gender() == Gender::Female));
        assert!(WeightClass::MALE.iter().all(|c| c.gender() == Gender::Male));
    }

    #[test]
    fn youth_only_classes_are_the_lightest_of_each_gender() {
        assert_eq!(WeightClass::FEMALE[0], WeightClass::FCat44);
        assert_eq!(WeightClass::MALE[0], WeightClass::MCat52);
        assert!(WeightClass::FEMALE[1..].iter().all(|c| !c.is_youth_only()));
        assert!(WeightClass::MALE[1..].iter().all(|c| !c.is_youth_only()));
    }
}
