//! Proficiency score fixture utilities.

use crate::TestSetup;

pub mod data;

impl TestSetup {
    pub fn proficiency<'a>(&'a mut self) -> ProficiencyFixtures<'a> {
        ProficiencyFixtures { setup: self }
    }
}

pub struct ProficiencyFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
