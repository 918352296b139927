use airworthy::{
    model::flight::VerifyFlightRequest,
    server::{controller::cfi::verify_flight, model::session::user::SessionUserId},
};
use airworthy_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::flight_log::VerificationStatus;

#[tokio::test]
/// Expect 200 success when resolving a pending flight as verified
async fn returns_success_for_pending_flight() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    let flight = test
        .flight()
        .insert_flight(pilot.id, VerificationStatus::Pending)
        .await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let request = VerifyFlightRequest {
        status: VerificationStatus::Verified,
    };

    let result = verify_flight(
        State(test.state()),
        test.session.clone(),
        Path(flight.id),
        Json(request),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the flight was already resolved
async fn returns_conflict_for_resolved_flight() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    let pilot = test.user().insert_pilot("pilot@example.com").await?;
    let flight = test
        .flight()
        .insert_flight(pilot.id, VerificationStatus::Rejected)
        .await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let request = VerifyFlightRequest {
        status: VerificationStatus::Verified,
    };

    let result = verify_flight(
        State(test.state()),
        test.session.clone(),
        Path(flight.id),
        Json(request),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a flight that does not exist
async fn returns_not_found_for_missing_flight() -> Result<(), TestError> {
    let mut test = test_setup_with_platform_tables!()?;
    let cfi = test.user().insert_cfi("cfi@example.com").await?;
    SessionUserId::insert(&test.session, cfi.id).await.unwrap();

    let request = VerifyFlightRequest {
        status: VerificationStatus::Verified,
    };

    let result = verify_flight(
        State(test.state()),
        test.session.clone(),
        Path(42),
        Json(request),
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
    SessionUserId::insert(&test.session, pilot.id).await.unwrap();

    let request = VerifyFlightRequest {
        status: VerificationStatus::Verified,
    };

    let result = verify_flight(
        State(test.state()),
        test.session.clone(),
        Path(flight.id),
        Json(request),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
