use airworthy::{
    model::cfi::AssignStudentRequest,
    server::{
        controller::cfi::{assign_student, get_students},
        model::session::user::SessionUserId,
    },
};
use airworthy_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::proficiency_score::DiscountTier;

mod get {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with the instructor's active roster
    async fn returns_success_with_roster() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        let student = test.user().insert_pilot("student@example.com").await?;
        test.cfi()
            .insert_relationship(cfi.id, student.id, "active")
            .await?;
        test.proficiency()
            .insert_score(student.id, 85, DiscountTier::Silver, 10)
            .await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let result = get_students(State(test.state()), test.session.clone()).await;

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

        let result = get_students(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized without a user ID in session
    async fn returns_unauthorized_without_session() -> Result<(), TestError> {
        let test = test_setup_with_platform_tables!()?;

        let result = get_students(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod assign {
    use super::*;

    #[tokio::test]
    /// Expect 201 created for taking on a new student
    async fn returns_created_for_new_student() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        let student = test.user().insert_pilot("student@example.com").await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let request = AssignStudentRequest {
            student_id: student.id,
        };

        let result =
            assign_student(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 not found for a student that does not exist
    async fn returns_not_found_for_missing_student() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let request = AssignStudentRequest { student_id: 42 };

        let result =
            assign_student(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 409 conflict when the student is already on the roster
    async fn returns_conflict_for_duplicate_assignment() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let cfi = test.user().insert_cfi("cfi@example.com").await?;
        let student = test.user().insert_pilot("student@example.com").await?;
        test.cfi()
            .insert_relationship(cfi.id, student.id, "active")
            .await?;
        SessionUserId::insert(&test.session, cfi.id).await.unwrap();

        let request = AssignStudentRequest {
            student_id: student.id,
        };

        let result =
            assign_student(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 forbidden when a pilot calls an instructor endpoint
    async fn returns_forbidden_for_pilot_principal() -> Result<(), TestError> {
        let mut test = test_setup_with_platform_tables!()?;
        let pilot = test.user().insert_pilot("pilot@example.com").await?;
        let other = test.user().insert_pilot("other@example.com").await?;
        SessionUserId::insert(&test.session, pilot.id).await.unwrap();

        let request = AssignStudentRequest {
            student_id: other.id,
        };

        let result =
            assign_student(State(test.state()), test.session.clone(), Json(request)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}
