//! Flight log services.
//!
//! Covers a pilot's own flight logbook (submission and listing) and the CFI
//! verification workflow in [`verification`]. Submission is the only way a
//! flight enters the system, and it always enters pending.

pub mod verification;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::flight::CreateFlightLogRequest,
    server::{
        data::flight::{FlightLogRepository, NewFlightLog},
        error::{validation::ValidationError, Error},
    },
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    /// Creates a new instance of [`FlightService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a flight into the verification queue.
    ///
    /// The stored verification state is always pending; the payload carries no
    /// status field and one smuggled in through extra JSON keys is ignored by
    /// deserialization.
    pub async fn create_flight_log(
        &self,
        pilot_id: i32,
        request: CreateFlightLogRequest,
    ) -> Result<entity::flight_log::Model, Error> {
        let flight_date = validate_create(&request)?;

        let flight_repository = FlightLogRepository::new(self.db);

        let flight = flight_repository
            .create(NewFlightLog {
                pilot_id,
                flight_date,
                departure_airport: request.departure_airport,
                arrival_airport: request.arrival_airport,
                aircraft_tail_number: request.aircraft_tail_number,
                aircraft_type: request.aircraft_type,
                flight_duration: request.flight_duration,
                tracking_ref: request.tracking_ref,
                notes: request.notes,
            })
            .await?;

        Ok(flight)
    }

    /// The pilot's logbook, most recent flight first
    pub async fn list_flight_logs(
        &self,
        pilot_id: i32,
    ) -> Result<Vec<entity::flight_log::Model>, Error> {
        let flight_repository = FlightLogRepository::new(self.db);

        let flights = flight_repository.list_by_pilot(pilot_id).await?;

        Ok(flights)
    }
}

fn validate_create(request: &CreateFlightLogRequest) -> Result<NaiveDate, ValidationError> {
    let mut errors = ValidationError::new();

    let flight_date = match NaiveDate::parse_from_str(request.flight_date.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push("flight_date", "must be a date in YYYY-MM-DD form");
            None
        }
    };

    for (field, value) in [
        ("departure_airport", &request.departure_airport),
        ("arrival_airport", &request.arrival_airport),
        ("aircraft_tail_number", &request.aircraft_tail_number),
        ("aircraft_type", &request.aircraft_type),
    ] {
        if value.trim().is_empty() {
            errors.push(field, "must not be empty");
        }
    }

    if let Some(duration) = request.flight_duration {
        if !duration.is_finite() || duration < 0.0 {
            errors.push("flight_duration", "must be a non-negative number of hours");
        }
    }

    match (flight_date, errors.is_empty()) {
        (Some(flight_date), true) => Ok(flight_date),
        _ => Err(errors),
    }
}
