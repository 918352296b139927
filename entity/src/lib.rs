pub mod prelude;

pub mod cfi_endorsement;
pub mod cfi_student_relationship;
pub mod flight_log;
pub mod maneuver_check;
pub mod pilot_profile;
pub mod proficiency_score;
pub mod user;
