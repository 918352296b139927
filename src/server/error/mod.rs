//! Error types for the Airworthy server application.
//!
//! This module provides a comprehensive error handling system with specialized error types
//! for different domains (authentication, configuration, request validation, flight
//! verification, CFI operations). All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for ergonomic error definitions with automatic `Display`
//! and `Error` trait implementations.

pub mod auth;
pub mod cfi;
pub mod config;
pub mod flight;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, cfi::CfiError, config::ConfigError, flight::FlightError,
        validation::ValidationError,
    },
};

/// Main error type for the Airworthy server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables, tier schedule)
/// - Authentication errors (session, credentials, role checks)
/// - Validation errors (field-level problems with a request payload)
/// - Flight verification errors (missing or already-resolved flights)
/// - CFI errors (roster, maneuver review, endorsement preconditions)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credentials, role checks).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Field-level validation error for a request payload.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Flight verification error (missing flight, verify/reject conflict).
    #[error(transparent)]
    FlightError(#[from] FlightError),
    /// CFI operation error (roster, maneuver review, endorsements).
    #[error(transparent)]
    CfiError(#[from] CfiError),
    /// A referenced record does not exist.
    #[error("{resource} {id:?} not found")]
    NotFound {
        /// Human-readable name of the missing record type, e.g. "Pilot profile".
        resource: &'static str,
        id: i32,
    },
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Airworthy's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error
    /// that needs to be reported as a GitHub issue.
    #[error("Internal error with Airworthy's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while the domain
/// error types carry their own response mappings.
///
/// # Returns
/// - 400 Bad Request - For validation failures and impossible assignments
/// - 401 Unauthorized - For missing sessions and bad credentials
/// - 403 Forbidden - For role check failures
/// - 404 Not Found - For missing records
/// - 409 Conflict - For verification and roster races
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::FlightError(err) => err.into_response(),
            Self::CfiError(err) => err.into_response(),
            Self::NotFound { resource, id } => {
                tracing::debug!(id = %id, "{resource} not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{resource} not found"),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
