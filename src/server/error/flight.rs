use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("Flight log {0:?} not found")]
    NotFound(i32),
    #[error("Flight log {id:?} was already resolved as {status}")]
    AlreadyResolved { id: i32, status: String },
}

impl IntoResponse for FlightError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(id) => {
                tracing::debug!(flight_log_id = %id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Flight log not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AlreadyResolved { ref status, .. } => {
                let error = format!("Flight has already been {status}");
                tracing::debug!("{}", self);

                (StatusCode::CONFLICT, Json(ErrorDto { error })).into_response()
            }
        }
    }
}
