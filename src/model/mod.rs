//! Wire types for the HTTP API.
//!
//! Request payloads and response DTOs exchanged with API consumers. These types
//! carry only what the API exposes; database models are converted at this
//! boundary so storage details (password hashes, raw disclosure columns) never
//! leak into responses.

pub mod api;
pub mod cfi;
pub mod flight;
pub mod maneuver;
pub mod proficiency;
pub mod profile;
pub mod user;
