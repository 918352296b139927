//! Instruction relationship and endorsement fixture utilities.

use crate::TestSetup;

pub mod data;

impl TestSetup {
    pub fn cfi<'a>(&'a mut self) -> CfiFixtures<'a> {
        CfiFixtures { setup: self }
    }
}

pub struct CfiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
