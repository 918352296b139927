//! Server application core modules.
//!
//! This module contains all server-side functionality for the Airworthy platform, including
//! HTTP routing, session authentication, database operations, the flight verification
//! workflow, and proficiency discount derivation. It provides the complete backend for
//! managing pilot insurance profiles, flight logs, CFI rosters, and endorsements.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
