//! Tests for instructor controller endpoints.
//!
//! This module contains integration tests for CFI-facing HTTP endpoints,
//! including roster management, the pending review queue, flight verification,
//! maneuver review, and endorsement issuance.

mod endorsements;
mod pending_reviews;
mod review_maneuver;
mod students;
mod verify_flight;
