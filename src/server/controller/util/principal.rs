use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, principal::Principal, session::user::SessionUserId},
};

/// Resolves the account behind the request's session.
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The request's session
///
/// # Returns
/// - `Ok(entity::user::Model)`: The logged-in account
/// - `Err(Error::AuthError(AuthError::Unauthenticated))`: No user ID present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   in the database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_session_user(
    state: &AppState,
    session: &Session,
) -> Result<entity::user::Model, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::Unauthenticated));
    };

    let user_repository = UserRepository::new(&state.db);

    let Some(user) = user_repository.get(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with an active session but no database record",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// The session account reduced to the id and role services authorize against
pub async fn require_principal(state: &AppState, session: &Session) -> Result<Principal, Error> {
    let user = get_session_user(state, session).await?;

    Ok(Principal::from(&user))
}
