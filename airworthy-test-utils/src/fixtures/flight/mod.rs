//! Flight log and maneuver check fixture utilities.
//!
//! This module provides methods for creating flight test fixtures in each verification
//! state, plus factory functions for creating in-memory model instances.

use crate::TestSetup;

pub mod data;
pub mod factory;

impl TestSetup {
    pub fn flight<'a>(&'a mut self) -> FlightFixtures<'a> {
        FlightFixtures { setup: self }
    }
}

pub struct FlightFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
