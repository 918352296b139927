//! Flight log and maneuver check database insertion utilities.

use entity::{flight_log::VerificationStatus, maneuver_check::ManeuverType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::flight::{factory, FlightFixtures},
    model::{FlightLogModel, ManeuverCheckModel},
};

impl<'a> FlightFixtures<'a> {
    /// Insert a flight log in the given verification state.
    ///
    /// Creates a FlightLog record for a KJFK to KLAX leg in an SR22 with standard
    /// test values.
    ///
    /// # Arguments
    /// - `pilot_id` - The pilot who flew; the account must already exist
    /// - `status` - The verification state the flight starts in
    ///
    /// # Returns
    /// - `Ok(FlightLogModel)` - The created flight log record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_flight(
        &self,
        pilot_id: i32,
        status: VerificationStatus,
    ) -> Result<FlightLogModel, TestError> {
        let flight = factory::mock_flight_log_model(0, pilot_id, status);

        Ok(
            entity::prelude::FlightLog::insert(entity::flight_log::ActiveModel {
                pilot_id: ActiveValue::Set(flight.pilot_id),
                flight_date: ActiveValue::Set(flight.flight_date),
                departure_airport: ActiveValue::Set(flight.departure_airport),
                arrival_airport: ActiveValue::Set(flight.arrival_airport),
                aircraft_tail_number: ActiveValue::Set(flight.aircraft_tail_number),
                aircraft_type: ActiveValue::Set(flight.aircraft_type),
                flight_duration: ActiveValue::Set(flight.flight_duration),
                tracking_ref: ActiveValue::Set(flight.tracking_ref),
                verification_status: ActiveValue::Set(flight.verification_status),
                verified_at: ActiveValue::Set(flight.verified_at),
                verified_by: ActiveValue::Set(flight.verified_by),
                notes: ActiveValue::Set(flight.notes),
                created_at: ActiveValue::Set(flight.created_at),
                updated_at: ActiveValue::Set(flight.updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a pending maneuver check detected within a flight.
    ///
    /// # Arguments
    /// - `flight_log_id` - The flight the maneuver was detected in; must already exist
    /// - `pilot_id` - The pilot who flew; must already exist
    /// - `maneuver_type` - The kind of maneuver the detection engine recognized
    ///
    /// # Returns
    /// - `Ok(ManeuverCheckModel)` - The created maneuver check record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_maneuver_check(
        &self,
        flight_log_id: i32,
        pilot_id: i32,
        maneuver_type: ManeuverType,
    ) -> Result<ManeuverCheckModel, TestError> {
        let check = factory::mock_maneuver_check_model(0, flight_log_id, pilot_id);

        Ok(
            entity::prelude::ManeuverCheck::insert(entity::maneuver_check::ActiveModel {
                flight_log_id: ActiveValue::Set(check.flight_log_id),
                pilot_id: ActiveValue::Set(check.pilot_id),
                maneuver_type: ActiveValue::Set(maneuver_type),
                status: ActiveValue::Set(check.status),
                score: ActiveValue::Set(check.score),
                bank_angle: ActiveValue::Set(check.bank_angle),
                altitude_deviation: ActiveValue::Set(check.altitude_deviation),
                speed_deviation: ActiveValue::Set(check.speed_deviation),
                heading_deviation: ActiveValue::Set(check.heading_deviation),
                detected_at: ActiveValue::Set(check.detected_at),
                latitude: ActiveValue::Set(check.latitude),
                longitude: ActiveValue::Set(check.longitude),
                reviewed_by: ActiveValue::Set(check.reviewed_by),
                reviewed_at: ActiveValue::Set(check.reviewed_at),
                review_notes: ActiveValue::Set(check.review_notes),
                created_at: ActiveValue::Set(check.created_at),
                updated_at: ActiveValue::Set(check.updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
