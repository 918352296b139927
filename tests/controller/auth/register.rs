use airworthy::{
    model::user::RegisterUserRequest,
    server::{controller::auth::register, model::session::user::SessionUserId},
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

fn registration() -> RegisterUserRequest {
    RegisterUserRequest {
        email: "pilot@example.com".to_string(),
        password: "correct horse".to_string(),
        first_name: "Test".to_string(),
        last_name: "Pilot".to_string(),
    }
}

#[tokio::test]
/// Expect 201 created for a new registration, with the account logged in
async fn returns_created_and_logs_new_pilot_in() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let result = register(State(test.state()), test.session.clone(), Json(registration())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Registration should start a session for the new account
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when every field of the payload is rejected
async fn returns_bad_request_for_invalid_payload() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let request = RegisterUserRequest {
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        first_name: String::new(),
        last_name: String::new(),
    };

    let result = register(State(test.state()), test.session.clone(), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the email is already registered
async fn returns_bad_request_for_taken_email() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    test.user().insert_pilot("pilot@example.com").await?;

    let result = register(State(test.state()), test.session.clone(), Json(registration())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = register(State(test.state()), test.session.clone(), Json(registration())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
