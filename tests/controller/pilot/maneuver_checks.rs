use airworthy::server::{
    controller::pilot::get_maneuver_checks, model::session::user::SessionUserId,
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::{flight_log::VerificationStatus, maneuver_check::ManeuverType};

#[tokio::test]
/// Expect 200 success with the pilot's detected maneuvers
async fn returns_success_with_own_maneuvers() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    let flight = test
        .flight()
        .insert_flight(pilot.id, VerificationStatus::Pending)
        .await?;
    test.flight()
        .insert_maneuver_check(flight.id, pilot.id, ManeuverType::SteepTurns)
        .await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = get_maneuver_checks(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with an empty list for a pilot with no flights
async fn returns_success_with_no_maneuvers() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = get_maneuver_checks(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a user ID in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_platform_tables!()?;

    let result = get_maneuver_checks(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
