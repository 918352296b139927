use airworthy::server::{controller::auth::get_user, model::session::user::SessionUserId};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

#[tokio::test]
/// Expect 200 success with user information for a logged-in account
async fn returns_success_for_logged_in_user() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a user ID in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a session pointing at a deleted account, with the
/// stale session cleared
async fn returns_not_found_for_stale_session() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let deleted_user_id = 42;
    SessionUserId::insert(&test.session, deleted_user_id)
        .await
        .unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user_id = 1;
    SessionUserId::insert(&test.session, user_id).await.unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
