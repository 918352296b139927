use entity::flight_log::VerificationStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::flight::FlightLogRepository,
    error::{flight::FlightError, validation::ValidationError, Error},
    model::principal::Principal,
};

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationService<'a> {
    /// Creates a new instance of [`VerificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a pending flight as verified or rejected.
    ///
    /// The transition is a conditional update keyed on the pending state:
    /// when two verdicts race, exactly one lands and the loser refetches to
    /// report the flight as already resolved. Terminal states never change
    /// again through any code path.
    pub async fn verify_flight(
        &self,
        principal: Principal,
        flight_log_id: i32,
        status: VerificationStatus,
    ) -> Result<entity::flight_log::Model, Error> {
        principal.require_cfi()?;

        if status == VerificationStatus::Pending {
            return Err(ValidationError::single("status", "must be verified or rejected").into());
        }

        let flight_repository = FlightLogRepository::new(self.db);

        let rows_updated = flight_repository
            .resolve(flight_log_id, status, principal.user_id)
            .await?;

        if rows_updated == 0 {
            // Refetch to tell a missing flight from a lost race
            let Some(flight) = flight_repository.get(flight_log_id).await? else {
                return Err(Error::FlightError(FlightError::NotFound(flight_log_id)));
            };

            return Err(Error::FlightError(FlightError::AlreadyResolved {
                id: flight_log_id,
                status: flight.verification_status.to_value(),
            }));
        }

        let flight = flight_repository
            .get(flight_log_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Flight log {flight_log_id} disappeared after its verification update"
                ))
            })?;

        Ok(flight)
    }
}
