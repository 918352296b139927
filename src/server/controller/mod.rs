//! HTTP controller endpoints for the Airworthy web API.
//!
//! This module contains Axum handlers for authentication, pilot self-service,
//! and instructor workflows. Controllers handle HTTP requests, resolve the
//! session principal, delegate to services, and return appropriate HTTP
//! responses. They integrate with tower-sessions for session management and
//! use utoipa for OpenAPI documentation.

pub mod auth;
pub mod cfi;
pub mod pilot;
pub mod user;
pub mod util;
