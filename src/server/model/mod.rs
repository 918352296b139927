//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! the authenticated request principal, and session data structures. These models bridge the
//! gap between database entities and HTTP handlers.

pub mod app;
pub mod principal;
pub mod session;
