use airworthy::{
    model::profile::UpdatePilotProfile,
    server::{
        controller::pilot::{get_pilot_profile, upsert_pilot_profile},
        model::session::user::SessionUserId,
    },
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

fn profile_update() -> UpdatePilotProfile {
    UpdatePilotProfile {
        address: Some("1 Hangar Way".to_string()),
        city: Some("Wichita".to_string()),
        state: Some("KS".to_string()),
        airmen_certificate_no: Some("A1234567".to_string()),
        certificate_private: Some(true),
        ..Default::default()
    }
}

mod get {
    use super::*;

    #[tokio::test]
    /// Expect 404 not found before the pilot has submitted a profile
    async fn returns_not_found_before_first_submission() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let result = get_pilot_profile(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 success with the stored profile after a submission
    async fn returns_success_after_submission() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let submit = upsert_pilot_profile(
            State(test.state()),
            test.session.clone(),
            Json(profile_update()),
        )
        .await;
        assert!(submit.is_ok());

        let result = get_pilot_profile(State(test.state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized without a user ID in session
    async fn returns_unauthorized_without_session() -> Result<(), TestError> {
        let test = test_setup_with_platform_tables!()?;

        let result = get_pilot_profile(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod upsert {
    use super::*;

    #[tokio::test]
    /// Expect 200 success when the first submission creates the profile
    async fn returns_success_for_first_submission() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let result = upsert_pilot_profile(
            State(test.state()),
            test.session.clone(),
            Json(profile_update()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 success when a later submission updates stored fields
    async fn returns_success_for_partial_update() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let first = upsert_pilot_profile(
            State(test.state()),
            test.session.clone(),
            Json(profile_update()),
        )
        .await;
        assert!(first.is_ok());

        let request = UpdatePilotProfile {
            city: Some("Olathe".to_string()),
            ..Default::default()
        };

        let result =
            upsert_pilot_profile(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized without a user ID in session
    async fn returns_unauthorized_without_session() -> Result<(), TestError> {
        let test = test_setup_with_platform_tables!()?;

        let result = upsert_pilot_profile(
            State(test.state()),
            test.session.clone(),
            Json(profile_update()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
