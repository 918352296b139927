use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    Unauthenticated,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
    #[error("User ID {user_id:?} with role {role:?} attempted an instructor-only operation")]
    CfiRequired { user_id: i32, role: String },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => {
                tracing::debug!("{}", Self::Unauthenticated);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid email or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::EmailTaken(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Email is already registered".to_string(),
                }),
            )
                .into_response(),
            Self::CfiRequired { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Instructor access required".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
