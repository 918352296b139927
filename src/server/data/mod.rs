//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (accounts, insurance profiles, flights, maneuver checks,
//! proficiency scores, instruction rosters, endorsements).

pub mod endorsement;
pub mod flight;
pub mod maneuver;
pub mod profile;
pub mod proficiency;
pub mod relationship;
pub mod user;
