//! Tests for pilot controller endpoints.
//!
//! This module contains integration tests for pilot-facing HTTP endpoints,
//! including insurance profile submission, flight logging, detected maneuver
//! retrieval, and proficiency score lookup.

mod flight_logs;
mod maneuver_checks;
mod proficiency_score;
mod profile;
