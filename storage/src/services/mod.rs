pub mod eligibility;
pub mod registration_rules;
pub mod roster_sync;
