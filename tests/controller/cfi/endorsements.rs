use airworthy::{
    model::cfi::IssueEndorsementRequest,
    server::{
        controller::cfi::{get_endorsements, issue_endorsement},
        model::session::user::SessionUserId,
    },
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::flight_log::VerificationStatus;

fn solo_request(pilot_id: i32) -> IssueEndorsementRequest {
    IssueEndorsementRequest {
        pilot_id,
        endorsement_type: "solo".to_string(),
        flight_log_id: None,
        notes: None,
    }
}

mod get {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with the instructor's issued endorsements
    async fn returns_success_with_issued_endorsements() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        test.cfi()
            .insert_endorsement(cfi.id, pilot.id, "solo", None)
            .await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let result = get_endorsements(State(test.state()), test.session.clone()).await;

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

        let result = get_endorsements(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod issue {
    use super::*;

    #[tokio::test]
    /// Expect 201 created for a new endorsement
    async fn returns_created_for_new_endorsement() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let result = issue_endorsement(
            State(test.state()),
            test.session.clone(),
            Json(solo_request(pilot.id)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 201 created for an endorsement tied to a verified flight
    async fn returns_created_for_flight_endorsement() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        let flight = test
            .flight()
            .insert_flight(pilot.id, VerificationStatus::Verified)
            .await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let request = IssueEndorsementRequest {
            pilot_id: pilot.id,
            endorsement_type: "proficiency_check".to_string(),
            flight_log_id: Some(flight.id),
            notes: Some("Checkride-level performance".to_string()),
        };

        let result =
            issue_endorsement(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 not found for a pilot that does not exist
    async fn returns_not_found_for_missing_pilot() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let result = issue_endorsement(
            State(test.state()),
            test.session.clone(),
            Json(solo_request(42)),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 bad request for a blank endorsement type
    async fn returns_bad_request_for_blank_type() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let request = IssueEndorsementRequest {
            pilot_id: pilot.id,
            endorsement_type: "  ".to_string(),
            flight_log_id: None,
            notes: None,
        };

        let result =
            issue_endorsement(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 forbidden when a pilot calls an instructor endpoint
    async fn returns_forbidden_for_pilot_principal() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        let other = test.user().insert_pilot("other@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let result = issue_endorsement(
            State(test.state()),
            test.session.clone(),
            Json(solo_request(other.id)),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}
