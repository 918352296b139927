use airworthy::server::{controller::user::get_user_role, model::session::user::SessionUserId};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

#[tokio::test]
/// Expect 200 success with the role for a logged-in pilot
async fn returns_success_for_pilot() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = get_user_role(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with the role for a logged-in instructor
async fn returns_success_for_cfi() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let result = get_user_role(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a user ID in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let result = get_user_role(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
