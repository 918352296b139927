use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        cfi::{
            AssignStudentRequest, CfiEndorsementDto, EndorsementsDto, IssueEndorsementRequest,
            RelationshipDto, StudentsDto,
        },
        flight::{FlightLogDto, PendingReviewsDto, VerifyFlightRequest},
        maneuver::{ManeuverCheckDto, ReviewManeuverRequest},
    },
    server::{
        controller::util::principal::require_principal,
        error::Error,
        model::app::AppState,
        service::{
            cfi::{endorsement::EndorsementService, CfiService},
            flight::verification::VerificationService,
            maneuver::ManeuverService,
        },
    },
};

pub static CFI_TAG: &str = "cfi";

/// Get the instructor's active students
#[utoipa::path(
    get,
    path = "/api/cfi/students",
    tag = CFI_TAG,
    responses(
        (status = 200, description = "Active students with their proficiency standing", body = StudentsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Instructor access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let principal = require_principal(&state, &session).await?;

    let cfi_service = CfiService::new(&state.db);

    let students = cfi_service.list_students(principal).await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Take a pilot onto the instructor's roster
#[utoipa::path(
    post,
    path = "/api/cfi/students",
    tag = CFI_TAG,
    request_body = AssignStudentRequest,
    responses(
        (status = 201, description = "The new active relationship", body = RelationshipDto),
        (status = 400, description = "The target account cannot be a student", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Instructor access required", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student is already on the roster", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_student(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AssignStudentRequest>,
) -> Result<impl IntoResponse, Error> {
    let principal = require_principal(&state, &session).await?;

    let cfi_service = CfiService::new(&state.db);

    let relationship = cfi_service
        .assign_student(principal, request.student_id)
        .await?;

    Ok((StatusCode::CREATED, Json(RelationshipDto::from(relationship))))
}

/// Get the pending flights of the instructor's students
///
/// Each flight comes bundled with the pilot and the maneuvers detected in it,
/// so a review needs no further requests.
#[utoipa::path(
    get,
    path = "/api/cfi/pending-reviews",
    tag = CFI_TAG,
    responses(
        (status = 200, description = "Pending flights awaiting review, oldest first", body = PendingReviewsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Instructor access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_reviews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let principal = require_principal(&state, &session).await?;

    let cfi_service = CfiService::new(&state.db);

    let reviews = cfi_service.list_pending_reviews(principal).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Verify or reject a pending flight
///
/// The flight's verification state is final once set: a flight that has
/// already been resolved conflicts instead of changing again.
#[utoipa::path(
    patch,
    path = "/api/cfi/flights/{flight_log_id}/verify",
    tag = CFI_TAG,
    params(
        ("flight_log_id" = i32, Path, description = "The flight to resolve")
    ),
    request_body = VerifyFlightRequest,
    responses(
        (status = 200, description = "The resolved flight", body = FlightLogDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Instructor access required", body = ErrorDto),
        (status = 404, description = "Flight log not found", body = ErrorDto),
        (status = 409, description = "Flight log already resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_flight(
    State(state): State<AppState>,
    session: Session,
    Path(flight_log_id): Path<i32>,
    Json(request): Json<VerifyFlightRequest>,
) -> Result<impl IntoResponse, Error> {
    let principal = require_principal(&state, &session).await?;

    let verification_service = VerificationService::new(&state.db);

    let flight = verification_service
        .verify_flight(principal, flight_log_id, request.status)
        .await?;

    Ok((StatusCode::OK, Json(FlightLogDto::from(flight))))
}

/// Record a verdict on a detected maneuver
#[utoipa::path(
    patch,
    path = "/api/cfi/maneuvers/{maneuver_check_id}/review",
    tag = CFI_TAG,
    params(
        ("maneuver_check_id" = i32, Path, description = "The maneuver check to review")
    ),
    request_body = ReviewManeuverRequest,
    responses(
        (status = 200, description = "The reviewed maneuver check", body = ManeuverCheckDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Instructor access required", body = ErrorDto),
        (status = 404, description = "Maneuver check not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_maneuver(
    State(state): State<AppState>,
    session: Session,
    Path(maneuver_check_id): Path<i32>,
    Json(request): Json<ReviewManeuverRequest>,
) -> Result<impl IntoResponse, Error> {
    let principal = require_principal(&state, &session).await?;

    let maneuver_service = ManeuverService::new(&state.db);

    let check = maneuver_service
        .review(principal, maneuver_check_id, request)
        .await?;

    Ok((StatusCode::OK, Json(ManeuverCheckDto::from(check))))
}

/// Get the endorsements the instructor has issued
#[utoipa::path(
    get,
    path = "/api/cfi/endorsements",
    tag = CFI_TAG,
    responses(
        (status = 200, description = "Issued endorsements, most recent first", body = EndorsementsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Instructor access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_endorsements(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let principal = require_principal(&state, &session).await?;

    let endorsement_service = EndorsementService::new(&state.db);

    let endorsements = endorsement_service.list(principal).await?;

    Ok((StatusCode::OK, Json(endorsements)))
}

/// Issue an endorsement to a pilot
#[utoipa::path(
    post,
    path = "/api/cfi/endorsements",
    tag = CFI_TAG,
    request_body = IssueEndorsementRequest,
    responses(
        (status = 201, description = "The issued endorsement", body = CfiEndorsementDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Instructor access required", body = ErrorDto),
        (status = 404, description = "Pilot or flight log not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_endorsement(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<IssueEndorsementRequest>,
) -> Result<impl IntoResponse, Error> {
    let principal = require_principal(&state, &session).await?;

    let endorsement_service = EndorsementService::new(&state.db);

    let endorsement = endorsement_service.issue(principal, request).await?;

    Ok((StatusCode::CREATED, Json(CfiEndorsementDto::from(endorsement))))
}
