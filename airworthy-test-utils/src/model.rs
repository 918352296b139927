//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main airworthy crate
//! to ensure consistency across tests.

/// Type alias for Airworthy user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the pilot insurance profile database model.
pub type PilotProfileModel = entity::pilot_profile::Model;

/// Type alias for the flight log database model.
pub type FlightLogModel = entity::flight_log::Model;

/// Type alias for the maneuver check database model.
pub type ManeuverCheckModel = entity::maneuver_check::Model;

/// Type alias for the proficiency score database model.
pub type ProficiencyScoreModel = entity::proficiency_score::Model;

/// Type alias for the CFI-student relationship database model.
pub type RelationshipModel = entity::cfi_student_relationship::Model;

/// Type alias for the CFI endorsement database model.
pub type EndorsementModel = entity::cfi_endorsement::Model;
