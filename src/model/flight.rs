use chrono::{NaiveDate, NaiveDateTime};
use entity::flight_log::VerificationStatus;
use serde::{Deserialize, Serialize};

use crate::model::{maneuver::ManeuverCheckDto, user::UserDto};

/// A logged flight and its verification state.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlightLogDto {
    pub id: i32,
    pub pilot_id: i32,
    pub flight_date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub aircraft_tail_number: String,
    pub aircraft_type: String,
    pub flight_duration: Option<f32>,
    pub tracking_ref: Option<String>,
    #[schema(value_type = String)]
    pub verification_status: VerificationStatus,
    pub verified_at: Option<NaiveDateTime>,
    pub verified_by: Option<i32>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::flight_log::Model> for FlightLogDto {
    fn from(flight: entity::flight_log::Model) -> Self {
        Self {
            id: flight.id,
            pilot_id: flight.pilot_id,
            flight_date: flight.flight_date,
            departure_airport: flight.departure_airport,
            arrival_airport: flight.arrival_airport,
            aircraft_tail_number: flight.aircraft_tail_number,
            aircraft_type: flight.aircraft_type,
            flight_duration: flight.flight_duration,
            tracking_ref: flight.tracking_ref,
            verification_status: flight.verification_status,
            verified_at: flight.verified_at,
            verified_by: flight.verified_by,
            notes: flight.notes,
            created_at: flight.created_at,
            updated_at: flight.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlightLogsDto {
    pub flights: Vec<FlightLogDto>,
}

/// Payload for logging a new flight.
///
/// There is no verification field: every flight enters the queue as pending
/// regardless of what the client sends.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFlightLogRequest {
    /// Date flown, `YYYY-MM-DD`
    pub flight_date: String,
    /// Departure airport identifier, e.g. `KJFK`
    pub departure_airport: String,
    /// Arrival airport identifier, e.g. `KLAX`
    pub arrival_airport: String,
    pub aircraft_tail_number: String,
    pub aircraft_type: String,
    pub flight_duration: Option<f32>,
    /// External flight-tracking reference, if the flight was imported
    pub tracking_ref: Option<String>,
    pub notes: Option<String>,
}

/// Verification decision for a pending flight.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VerifyFlightRequest {
    /// `verified` or `rejected`
    #[schema(value_type = String)]
    pub status: VerificationStatus,
}

/// A pending flight bundled with the pilot and detected maneuvers a CFI
/// needs to review it.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlightWithDetailsDto {
    pub flight: FlightLogDto,
    pub pilot: UserDto,
    pub maneuvers: Vec<ManeuverCheckDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PendingReviewsDto {
    pub flights: Vec<FlightWithDetailsDto>,
}
