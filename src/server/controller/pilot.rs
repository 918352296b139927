use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        flight::{CreateFlightLogRequest, FlightLogDto, FlightLogsDto},
        maneuver::{ManeuverCheckDto, ManeuverChecksDto},
        proficiency::ProficiencyScoreDto,
        profile::{PilotProfileDto, UpdatePilotProfile},
    },
    server::{
        controller::util::principal::get_session_user,
        error::Error,
        model::app::AppState,
        service::{
            flight::FlightService, maneuver::ManeuverService, proficiency::ProficiencyService,
            profile::ProfileService,
        },
    },
};

pub static PILOT_TAG: &str = "pilot";

/// Get the logged-in pilot's insurance profile
#[utoipa::path(
    get,
    path = "/api/pilot-profile",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "The pilot's profile", body = PilotProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No profile submitted yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    let profile_service = ProfileService::new(&state.db);

    let profile = profile_service.get_profile(user.id).await?;

    Ok((StatusCode::OK, Json(PilotProfileDto::from(profile))))
}

/// Create or update the logged-in pilot's insurance profile
///
/// Fields present in the payload overwrite stored values; omitted fields keep
/// them. The first submission creates the profile.
#[utoipa::path(
    post,
    path = "/api/pilot-profile",
    tag = PILOT_TAG,
    request_body = UpdatePilotProfile,
    responses(
        (status = 200, description = "The stored profile after the update", body = PilotProfileDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_pilot_profile(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdatePilotProfile>,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    let profile_service = ProfileService::new(&state.db);

    let profile = profile_service.upsert_profile(user.id, request).await?;

    Ok((StatusCode::OK, Json(PilotProfileDto::from(profile))))
}

/// Get the logged-in pilot's flight logbook
#[utoipa::path(
    get,
    path = "/api/flight-logs",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "The pilot's flights, most recent first", body = FlightLogsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_logs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    let flight_service = FlightService::new(&state.db);

    let flights = flight_service.list_flight_logs(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(FlightLogsDto {
            flights: flights.into_iter().map(FlightLogDto::from).collect(),
        }),
    ))
}

/// Log a flight for verification
///
/// The flight always enters the queue pending, whatever the payload says.
#[utoipa::path(
    post,
    path = "/api/flight-logs",
    tag = PILOT_TAG,
    request_body = CreateFlightLogRequest,
    responses(
        (status = 201, description = "The logged flight, pending verification", body = FlightLogDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight_log(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CreateFlightLogRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    let flight_service = FlightService::new(&state.db);

    let flight = flight_service.create_flight_log(user.id, request).await?;

    Ok((StatusCode::CREATED, Json(FlightLogDto::from(flight))))
}

/// Get the maneuvers detected in the logged-in pilot's flights
#[utoipa::path(
    get,
    path = "/api/maneuver-checks",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "The pilot's maneuver checks, most recent first", body = ManeuverChecksDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maneuver_checks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    let maneuver_service = ManeuverService::new(&state.db);

    let checks = maneuver_service.list_own(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ManeuverChecksDto {
            maneuvers: checks.into_iter().map(ManeuverCheckDto::from).collect(),
        }),
    ))
}

/// Get the logged-in pilot's proficiency score and premium discount
///
/// A pilot who has never been scored reads as zero scores with no discount;
/// the row is created on first access.
#[utoipa::path(
    get,
    path = "/api/proficiency-score",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "The pilot's scoring summary", body = ProficiencyScoreDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_proficiency_score(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_session_user(&state, &session).await?;

    let proficiency_service = ProficiencyService::new(&state.db, &state.tiers);

    let score = proficiency_service.get_or_create(user.id).await?;

    Ok((StatusCode::OK, Json(ProficiencyScoreDto::from(score))))
}
