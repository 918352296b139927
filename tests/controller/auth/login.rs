use airworthy::{
    model::user::{LoginRequest, RegisterUserRequest},
    server::{
        controller::auth::{login, register},
        model::session::user::SessionUserId,
    },
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Register an account through the handler so a password hash is stored.
async fn register_account(test: &TestSetup) -> Result<(), TestError> {
    let request = RegisterUserRequest {
        email: "pilot@example.com".to_string(),
        password: "correct horse".to_string(),
        first_name: "Test".to_string(),
        last_name: "Pilot".to_string(),
    };

    let result = register(State(test.state()), test.session.clone(), Json(request)).await;
    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 200 success for a login with the correct password
async fn returns_success_for_valid_credentials() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;
    register_account(&test).await?;

    let request = LoginRequest {
        email: "pilot@example.com".to_string(),
        password: "correct horse".to_string(),
    };

    let result = login(State(test.state()), test.session.clone(), Json(request)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a login with the wrong password
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;
    register_account(&test).await?;

    let request = LoginRequest {
        email: "pilot@example.com".to_string(),
        password: "battery staple".to_string(),
    };

    let result = login(State(test.state()), test.session.clone(), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a login against an email that was never registered
async fn returns_unauthorized_for_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let request = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: "correct horse".to_string(),
    };

    let result = login(State(test.state()), test.session.clone(), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let request = LoginRequest {
        email: "pilot@example.com".to_string(),
        password: "correct horse".to_string(),
    };

    let result = login(State(test.state()), test.session.clone(), Json(request)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
