use entity::maneuver_check::ManeuverStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::maneuver::ReviewManeuverRequest,
    server::{
        data::maneuver::ManeuverCheckRepository,
        error::{cfi::CfiError, validation::ValidationError, Error},
        model::principal::Principal,
    },
};

pub struct ManeuverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManeuverService<'a> {
    /// Creates a new instance of [`ManeuverService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The pilot's detected maneuvers, most recent first
    pub async fn list_own(
        &self,
        pilot_id: i32,
    ) -> Result<Vec<entity::maneuver_check::Model>, Error> {
        let maneuver_repository = ManeuverCheckRepository::new(self.db);

        let checks = maneuver_repository.list_by_pilot(pilot_id).await?;

        Ok(checks)
    }

    /// Records an instructor's verdict on a detected maneuver.
    ///
    /// A verdict is passed, failed or needs_review; a check cannot be put
    /// back to pending once a CFI has looked at it.
    pub async fn review(
        &self,
        principal: Principal,
        check_id: i32,
        request: ReviewManeuverRequest,
    ) -> Result<entity::maneuver_check::Model, Error> {
        principal.require_cfi()?;

        validate_review(&request)?;

        let maneuver_repository = ManeuverCheckRepository::new(self.db);

        let check = maneuver_repository
            .review(
                check_id,
                request.status,
                request.score,
                request.review_notes,
                principal.user_id,
            )
            .await?
            .ok_or(Error::CfiError(CfiError::ManeuverNotFound(check_id)))?;

        Ok(check)
    }
}

fn validate_review(request: &ReviewManeuverRequest) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    if request.status == ManeuverStatus::Pending {
        errors.push("status", "must be passed, failed or needs_review");
    }
    if let Some(score) = request.score {
        if !(0..=100).contains(&score) {
            errors.push("score", "must be between 0 and 100");
        }
    }

    errors.into_result()
}
