//! User account fixture utilities.
//!
//! This module provides methods for creating account test fixtures with each platform
//! role, plus factory functions for creating in-memory model instances.

use crate::TestSetup;

pub mod data;
pub mod factory;

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
