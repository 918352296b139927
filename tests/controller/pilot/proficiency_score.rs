use airworthy::server::{
    controller::pilot::get_proficiency_score, model::session::user::SessionUserId,
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::proficiency_score::DiscountTier;

#[tokio::test]
/// Expect 200 success with an existing scoring summary
async fn returns_success_for_existing_score() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    test.proficiency()
        .insert_score(pilot.id, 85, DiscountTier::Silver, 10)
        .await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = get_proficiency_score(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with a baseline summary for a pilot never scored before
async fn returns_success_without_prior_score() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = get_proficiency_score(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a user ID in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let result = get_proficiency_score(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
