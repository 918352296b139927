use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single field that failed validation
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    /// Name of the offending request field
    pub field: String,
    /// What constraint the field violated
    pub message: String,
}

/// The response when a request payload fails validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// The error message
    pub error: String,
    /// Per-field violations
    pub fields: Vec<FieldErrorDto>,
}
