//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test execution.
//! Each submodule provides specialized fixtures for different aspects of the platform:
//!
//! - `user` - Accounts with pilot, CFI and admin roles
//! - `flight` - Flight logs and detected maneuver checks
//! - `proficiency` - Scoring summaries
//! - `cfi` - Instruction relationships and endorsements

pub mod cfi;
pub mod flight;
pub mod proficiency;
pub mod user;
