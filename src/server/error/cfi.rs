use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CfiError {
    #[error("Student {0:?} not found")]
    StudentNotFound(i32),
    #[error("User {user_id:?} has role {role:?} and cannot be taken on as a student")]
    StudentNotPilot { user_id: i32, role: String },
    #[error("CFI {cfi_id:?} already has an active relationship with student {student_id:?}")]
    RelationshipExists { cfi_id: i32, student_id: i32 },
    #[error("Maneuver check {0:?} not found")]
    ManeuverNotFound(i32),
    #[error("Pilot {0:?} not found")]
    PilotNotFound(i32),
    #[error("Flight log {0:?} not found")]
    FlightNotFound(i32),
}

impl IntoResponse for CfiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::StudentNotFound(_) => (StatusCode::NOT_FOUND, "Student not found"),
            Self::StudentNotPilot { .. } => {
                (StatusCode::BAD_REQUEST, "User cannot be taken on as a student")
            }
            Self::RelationshipExists { .. } => (
                StatusCode::CONFLICT,
                "Student is already on this instructor's roster",
            ),
            Self::ManeuverNotFound(_) => (StatusCode::NOT_FOUND, "Maneuver check not found"),
            Self::PilotNotFound(_) => (StatusCode::NOT_FOUND, "Pilot not found"),
            Self::FlightNotFound(_) => (StatusCode::NOT_FOUND, "Flight log not found"),
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
