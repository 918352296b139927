use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        cfi::{CfiEndorsementDto, EndorsementWithPilotDto, EndorsementsDto, IssueEndorsementRequest},
        user::UserDto,
    },
    server::{
        data::{
            endorsement::{EndorsementRepository, NewEndorsement},
            flight::FlightLogRepository,
            user::UserRepository,
        },
        error::{cfi::CfiError, validation::ValidationError, Error},
        model::principal::Principal,
    },
};

pub struct EndorsementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EndorsementService<'a> {
    /// Creates a new instance of [`EndorsementService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues an endorsement in the instructor's name.
    ///
    /// Endorsements are append-only; a mistaken one is corrected by issuing
    /// another, never by editing history.
    pub async fn issue(
        &self,
        principal: Principal,
        request: IssueEndorsementRequest,
    ) -> Result<entity::cfi_endorsement::Model, Error> {
        principal.require_cfi()?;

        if request.endorsement_type.trim().is_empty() {
            return Err(ValidationError::single("endorsement_type", "must not be empty").into());
        }

        let user_repository = UserRepository::new(self.db);
        let endorsement_repository = EndorsementRepository::new(self.db);

        if user_repository.get(request.pilot_id).await?.is_none() {
            return Err(Error::CfiError(CfiError::PilotNotFound(request.pilot_id)));
        }

        if let Some(flight_log_id) = request.flight_log_id {
            let flight_repository = FlightLogRepository::new(self.db);
            if flight_repository.get(flight_log_id).await?.is_none() {
                return Err(Error::CfiError(CfiError::FlightNotFound(flight_log_id)));
            }
        }

        let endorsement = endorsement_repository
            .create(NewEndorsement {
                cfi_id: principal.user_id,
                pilot_id: request.pilot_id,
                flight_log_id: request.flight_log_id,
                endorsement_type: request.endorsement_type,
                notes: request.notes,
            })
            .await?;

        Ok(endorsement)
    }

    /// Endorsements the instructor has issued, joined to their recipients
    pub async fn list(&self, principal: Principal) -> Result<EndorsementsDto, Error> {
        principal.require_cfi()?;

        let endorsement_repository = EndorsementRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let endorsements = endorsement_repository.list_by_cfi(principal.user_id).await?;

        let pilot_ids: Vec<i32> = endorsements
            .iter()
            .map(|endorsement| endorsement.pilot_id)
            .collect();
        let pilots: HashMap<i32, entity::user::Model> = user_repository
            .get_many(&pilot_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut rows = Vec::with_capacity(endorsements.len());
        for endorsement in endorsements {
            let pilot = pilots.get(&endorsement.pilot_id).cloned().ok_or_else(|| {
                // Would only occur if the foreign key constraint requiring the
                // endorsed pilot to exist is not properly enforced
                Error::InternalError(format!(
                    "Failed to find pilot {} behind endorsement {}",
                    endorsement.pilot_id, endorsement.id
                ))
            })?;

            rows.push(EndorsementWithPilotDto {
                endorsement: CfiEndorsementDto::from(endorsement),
                pilot: UserDto::from(pilot),
            });
        }

        Ok(EndorsementsDto { endorsements: rows })
    }
}
