//! Instructor services.
//!
//! Covers the CFI's student roster and pending-review queue; endorsement
//! issuance lives in [`endorsement`]. Every operation takes the caller's
//! [`Principal`] and refuses non-instructor roles before touching any data.

pub mod endorsement;

use std::collections::HashMap;

use entity::user::UserRole;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::{
        cfi::{StudentWithProficiencyDto, StudentsDto},
        flight::{FlightLogDto, FlightWithDetailsDto, PendingReviewsDto},
        maneuver::ManeuverCheckDto,
        proficiency::ProficiencyScoreDto,
        user::UserDto,
    },
    server::{
        data::{
            flight::FlightLogRepository, maneuver::ManeuverCheckRepository,
            proficiency::ProficiencyRepository, relationship::RelationshipRepository,
            user::UserRepository,
        },
        error::{cfi::CfiError, Error},
        model::principal::Principal,
    },
};

pub struct CfiService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CfiService<'a> {
    /// Creates a new instance of [`CfiService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Takes a pilot onto the instructor's roster.
    ///
    /// A CFI/student pair may have at most one active relationship at a time;
    /// ended relationships stay as history and do not block a new one.
    pub async fn assign_student(
        &self,
        principal: Principal,
        student_id: i32,
    ) -> Result<entity::cfi_student_relationship::Model, Error> {
        principal.require_cfi()?;

        let user_repository = UserRepository::new(self.db);
        let relationship_repository = RelationshipRepository::new(self.db);

        let Some(student) = user_repository.get(student_id).await? else {
            return Err(Error::CfiError(CfiError::StudentNotFound(student_id)));
        };

        if student.role != UserRole::Pilot {
            return Err(Error::CfiError(CfiError::StudentNotPilot {
                user_id: student_id,
                role: student.role.to_value(),
            }));
        }

        if relationship_repository
            .find_active(principal.user_id, student_id)
            .await?
            .is_some()
        {
            return Err(Error::CfiError(CfiError::RelationshipExists {
                cfi_id: principal.user_id,
                student_id,
            }));
        }

        let relationship = relationship_repository
            .create(principal.user_id, student_id)
            .await?;

        Ok(relationship)
    }

    /// The instructor's active students with their proficiency standing
    pub async fn list_students(&self, principal: Principal) -> Result<StudentsDto, Error> {
        principal.require_cfi()?;

        let relationship_repository = RelationshipRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);
        let proficiency_repository = ProficiencyRepository::new(self.db);

        let relationships = relationship_repository
            .list_active_by_cfi(principal.user_id)
            .await?;
        let student_ids: Vec<i32> = relationships
            .iter()
            .map(|relationship| relationship.student_id)
            .collect();

        let mut students: HashMap<i32, entity::user::Model> = user_repository
            .get_many(&student_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut scores: HashMap<i32, entity::proficiency_score::Model> = proficiency_repository
            .list_by_pilot_ids(&student_ids)
            .await?
            .into_iter()
            .map(|score| (score.pilot_id, score))
            .collect();

        let mut rows = Vec::with_capacity(relationships.len());
        for relationship in relationships {
            let student = students.remove(&relationship.student_id).ok_or_else(|| {
                // Would only occur if the foreign key constraint requiring the
                // student account to exist is not properly enforced
                Error::InternalError(format!(
                    "Failed to find student {} behind relationship {}",
                    relationship.student_id, relationship.id
                ))
            })?;

            rows.push(StudentWithProficiencyDto {
                relationship_id: relationship.id,
                started_at: relationship.start_date,
                proficiency: scores
                    .remove(&relationship.student_id)
                    .map(ProficiencyScoreDto::from),
                student: UserDto::from(student),
            });
        }

        Ok(StudentsDto { students: rows })
    }

    /// Pending flights of the instructor's active students, each bundled with
    /// the pilot and the maneuvers detected in it.
    ///
    /// Scoped to the caller's own roster: a pilot with no active relationship
    /// to this CFI never shows up here, whichever instructor asks.
    pub async fn list_pending_reviews(
        &self,
        principal: Principal,
    ) -> Result<PendingReviewsDto, Error> {
        principal.require_cfi()?;

        let relationship_repository = RelationshipRepository::new(self.db);
        let flight_repository = FlightLogRepository::new(self.db);
        let maneuver_repository = ManeuverCheckRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let relationships = relationship_repository
            .list_active_by_cfi(principal.user_id)
            .await?;
        let student_ids: Vec<i32> = relationships
            .iter()
            .map(|relationship| relationship.student_id)
            .collect();

        let flights = flight_repository
            .list_pending_by_pilots(&student_ids)
            .await?;
        let flight_ids: Vec<i32> = flights.iter().map(|flight| flight.id).collect();

        let pilots: HashMap<i32, entity::user::Model> = user_repository
            .get_many(&student_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut maneuvers_by_flight: HashMap<i32, Vec<entity::maneuver_check::Model>> =
            HashMap::new();
        for check in maneuver_repository.list_by_flights(&flight_ids).await? {
            maneuvers_by_flight
                .entry(check.flight_log_id)
                .or_default()
                .push(check);
        }

        let mut rows = Vec::with_capacity(flights.len());
        for flight in flights {
            let pilot = pilots.get(&flight.pilot_id).cloned().ok_or_else(|| {
                // Would only occur if the foreign key constraint requiring the
                // pilot account to exist is not properly enforced
                Error::InternalError(format!(
                    "Failed to find pilot {} behind flight log {}",
                    flight.pilot_id, flight.id
                ))
            })?;

            let maneuvers = maneuvers_by_flight
                .remove(&flight.id)
                .unwrap_or_default()
                .into_iter()
                .map(ManeuverCheckDto::from)
                .collect();

            rows.push(FlightWithDetailsDto {
                flight: FlightLogDto::from(flight),
                pilot: UserDto::from(pilot),
                maneuvers,
            });
        }

        Ok(PendingReviewsDto { flights: rows })
    }
}
