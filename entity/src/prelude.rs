pub use super::cfi_endorsement::Entity as CfiEndorsement;
pub use super::cfi_student_relationship::Entity as CfiStudentRelationship;
pub use super::flight_log::Entity as FlightLog;
pub use super::maneuver_check::Entity as ManeuverCheck;
pub use super::pilot_profile::Entity as PilotProfile;
pub use super::proficiency_score::Entity as ProficiencyScore;
pub use super::user::Entity as User;
