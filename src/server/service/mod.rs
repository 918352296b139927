//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic,
//! coordinates between repositories, and enforces the platform's workflow
//! rules. Services cover account registration and login, pilot profile
//! upserts, the flight verification state machine, maneuver review,
//! proficiency scoring, and CFI roster and endorsement management.

pub mod auth;
pub mod cfi;
pub mod flight;
pub mod maneuver;
pub mod proficiency;
pub mod profile;
