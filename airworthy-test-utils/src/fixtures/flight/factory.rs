//! Factory functions for generating mock flight database models.
//!
//! Provides pure functions for creating flight log and maneuver check database models
//! with standard test values. These are in-memory model instances that don't require
//! database interaction, suitable for unit tests.

use chrono::{NaiveDate, Utc};
use entity::{
    flight_log::VerificationStatus,
    maneuver_check::{ManeuverStatus, ManeuverType},
};

use crate::model::{FlightLogModel, ManeuverCheckModel};

/// Create a mock flight log database model for testing.
///
/// Returns a FlightLogModel for a KJFK to KLAX leg in an SR22 with standard test
/// values. This creates an in-memory model instance without database interaction,
/// suitable for unit tests.
///
/// # Arguments
/// - `id` - The flight log ID
/// - `pilot_id` - The pilot who flew
/// - `status` - The verification state of the flight
///
/// # Returns
/// - `FlightLogModel` - A flight log model with test data
pub fn mock_flight_log_model(
    id: i32,
    pilot_id: i32,
    status: VerificationStatus,
) -> FlightLogModel {
    let now = Utc::now().naive_utc();
    FlightLogModel {
        id,
        pilot_id,
        flight_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        departure_airport: "KJFK".to_string(),
        arrival_airport: "KLAX".to_string(),
        aircraft_tail_number: "N12345".to_string(),
        aircraft_type: "SR22".to_string(),
        flight_duration: Some(5.5),
        tracking_ref: None,
        verification_status: status,
        verified_at: None,
        verified_by: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock maneuver check database model for testing.
///
/// Returns a pending steep-turns ManeuverCheckModel with plausible flight-dynamics
/// measurements. This creates an in-memory model instance without database
/// interaction, suitable for unit tests.
///
/// # Arguments
/// - `id` - The maneuver check ID
/// - `flight_log_id` - The flight the maneuver was detected in
/// - `pilot_id` - The pilot who flew
///
/// # Returns
/// - `ManeuverCheckModel` - A maneuver check model with test data
pub fn mock_maneuver_check_model(
    id: i32,
    flight_log_id: i32,
    pilot_id: i32,
) -> ManeuverCheckModel {
    let now = Utc::now().naive_utc();
    ManeuverCheckModel {
        id,
        flight_log_id,
        pilot_id,
        maneuver_type: ManeuverType::SteepTurns,
        status: ManeuverStatus::Pending,
        score: None,
        bank_angle: Some(45.2),
        altitude_deviation: Some(80.0),
        speed_deviation: Some(4.5),
        heading_deviation: Some(6.0),
        detected_at: Some(now),
        latitude: Some(40.6413),
        longitude: Some(-73.7781),
        reviewed_by: None,
        reviewed_at: None,
        review_notes: None,
        created_at: now,
        updated_at: now,
    }
}
