use airworthy::{
    model::maneuver::ReviewManeuverRequest,
    server::{controller::cfi::review_maneuver, model::session::user::SessionUserId},
};
use airworthy_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::{
    flight_log::VerificationStatus,
    maneuver_check::{ManeuverStatus, ManeuverType},
};

fn passing_review() -> ReviewManeuverRequest {
    ReviewManeuverRequest {
        status: ManeuverStatus::Passed,
        score: Some(88),
        review_notes: Some("Altitude held within standards".to_string()),
    }
}

#[tokio::test]
/// Expect 200 success when grading a detected maneuver
async fn returns_success_for_pending_maneuver() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    let flight = test
        .flight()
        .insert_flight(pilot.id, VerificationStatus::Pending)
        .await?;
    let check = test
        .flight()
        .insert_maneuver_check(flight.id, pilot.id, ManeuverType::SteepTurns)
        .await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let result = review_maneuver(
        State(test.state()),
        test.session.clone(),
        Path(check.id),
        Json(passing_review()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a maneuver check that does not exist
async fn returns_not_found_for_missing_maneuver() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let result = review_maneuver(
        State(test.state()),
        test.session.clone(),
        Path(42),
        Json(passing_review()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when a pilot calls an instructor endpoint
async fn returns_forbidden_for_pilot_principal() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    let flight = test
        .flight()
        .insert_flight(pilot.id, VerificationStatus::Pending)
        .await?;
    let check = test
        .flight()
        .insert_maneuver_check(flight.id, pilot.id, ManeuverType::SteepTurns)
        .await?;
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let result = review_maneuver(
        State(test.state()),
        test.session.clone(),
        Path(check.id),
        Json(passing_review()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
