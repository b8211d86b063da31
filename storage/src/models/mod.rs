mod athlete;
mod coach;
mod division;
mod event;
mod gender;
mod referee;
mod registration;
mod roster;
mod team;
mod tournament;
mod weight_class;

pub use athlete::Athlete;
pub use coach::Coach;
pub use division::{AthleteDivision, TournamentDivision};
pub use event::{Event, EventStatus};
pub use gender::Gender;
pub use referee::Referee;
pub use registration::Registration;
pub use roster::{CoachRole, EventCoachRegistration, EventRefereeAssignment};
pub use team::Team;
pub use tournament::{Equipment, Modality, Tournament};
pub use weight_class::WeightClass;
