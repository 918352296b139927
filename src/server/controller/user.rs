use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserRoleDto},
    server::{controller::util::principal::get_session_user, error::Error, model::app::AppState},
};

pub static USER_TAG: &str = "user";

/// Get the logged-in account's platform role
///
/// The client uses this to decide between the pilot and instructor dashboards.
#[utoipa::path(
    get,
    path = "/api/user/role",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The account's role", body = UserRoleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Session account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_role(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    Ok((StatusCode::OK, Json(UserRoleDto { role: user.role })))
}
