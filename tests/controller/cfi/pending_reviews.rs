use airworthy::server::{
    controller::cfi::get_pending_reviews, model::session::user::SessionUserId,
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::{flight_log::VerificationStatus, maneuver_check::ManeuverType};

#[tokio::test]
/// Expect 200 success with the pending flights of the instructor's students
async fn returns_success_with_pending_flights() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    let student = test.user().insert_pilot("student@example.com").await?;
    test.cfi()
        .insert_relationship(cfi.id, student.id, "active")
        .await?;
    let flight = test
        .flight()
        .insert_flight(student.id, VerificationStatus::Pending)
        .await?;
    test.flight()
        .insert_maneuver_check(flight.id, student.id, ManeuverType::SlowFlight)
        .await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let result = get_pending_reviews(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with an empty queue for an instructor without students
async fn returns_success_with_empty_queue() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let result = get_pending_reviews(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when a pilot calls an instructor endpoint
async fn returns_forbidden_for_pilot_principal() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = get_pending_reviews(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
