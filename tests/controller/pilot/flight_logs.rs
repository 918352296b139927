use airworthy::{
    model::flight::CreateFlightLogRequest,
    server::{
        controller::pilot::{create_flight_log, get_flight_logs},
        model::session::user::SessionUserId,
    },
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::flight_log::VerificationStatus;

fn flight_request() -> CreateFlightLogRequest {
    CreateFlightLogRequest {
        flight_date: "2026-03-14".to_string(),
        departure_airport: "KJFK".to_string(),
        arrival_airport: "KLAX".to_string(),
        aircraft_tail_number: "N12345".to_string(),
        aircraft_type: "SR22".to_string(),
        flight_duration: Some(5.4),
        tracking_ref: None,
        notes: None,
    }
}

mod get {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with the pilot's logged flights
    async fn returns_success_with_own_flights() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        test.flight()
            .insert_flight(pilot.id, VerificationStatus::Pending)
            .await?;
        test.flight()
            .insert_flight(pilot.id, VerificationStatus::Verified)
            .await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let result = get_flight_logs(State(test.state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized without a user ID in session
    async fn returns_unauthorized_without_session() -> Result<(), TestError> {
        let test = test_setup_with_platform_tables!()?;

        let result = get_flight_logs(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod create {
    use super::*;

    #[tokio::test]
    /// Expect 201 created for a well-formed flight log
    async fn returns_created_for_new_flight() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let result = create_flight_log(
            State(test.state()),
            test.session.clone(),
            Json(flight_request()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 bad request for a payload with missing fields and a bad date
    async fn returns_bad_request_for_invalid_payload() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let request = CreateFlightLogRequest {
            flight_date: "last tuesday".to_string(),
            departure_airport: String::new(),
            arrival_airport: String::new(),
            aircraft_tail_number: String::new(),
            aircraft_type: String::new(),
            flight_duration: Some(-1.0),
            tracking_ref: None,
            notes: None,
        };

        let result =
            create_flight_log(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized without a user ID in session
    async fn returns_unauthorized_without_session() -> Result<(), TestError> {
        let test = test_setup_with_platform_tables!()?;

        let result = create_flight_log(
            State(test.state()),
            test.session.clone(),
            Json(flight_request()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
