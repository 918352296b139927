use chrono::NaiveDateTime;
use entity::user::UserRole;
use serde::{Deserialize, Serialize};

/// A platform account, as exposed to API consumers.
///
/// The stored password hash is never serialized; conversions from the database
/// model drop it.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    #[schema(value_type = String)]
    pub role: UserRole,
    pub cfi_number: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: user.profile_image_url,
            role: user.role,
            cfi_number: user.cfi_number,
            created_at: user.created_at,
        }
    }
}

/// The logged-in account's role
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserRoleDto {
    #[schema(value_type = String)]
    pub role: UserRole,
}

/// Payload for creating an email/password account
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Payload for logging in with an email/password account
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
