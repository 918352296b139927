//! Instruction relationship and endorsement database insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::cfi::CfiFixtures,
    model::{EndorsementModel, RelationshipModel},
};

impl<'a> CfiFixtures<'a> {
    /// Insert an instruction relationship between a CFI and a student.
    ///
    /// # Arguments
    /// - `cfi_id` - The instructor account; must already exist
    /// - `student_id` - The student account; must already exist
    /// - `status` - Relationship status, e.g. `active` or `ended`
    ///
    /// # Returns
    /// - `Ok(RelationshipModel)` - The created relationship record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_relationship(
        &self,
        cfi_id: i32,
        student_id: i32,
        status: &str,
    ) -> Result<RelationshipModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::CfiStudentRelationship::insert(
            entity::cfi_student_relationship::ActiveModel {
                cfi_id: ActiveValue::Set(cfi_id),
                student_id: ActiveValue::Set(student_id),
                status: ActiveValue::Set(status.to_string()),
                start_date: ActiveValue::Set(now),
                end_date: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert an endorsement issued by a CFI to a pilot.
    ///
    /// # Arguments
    /// - `cfi_id` - The issuing instructor; must already exist
    /// - `pilot_id` - The endorsed pilot; must already exist
    /// - `endorsement_type` - Endorsement kind, e.g. `solo` or `proficiency_check`
    /// - `flight_log_id` - Optional flight the endorsement is tied to
    ///
    /// # Returns
    /// - `Ok(EndorsementModel)` - The created endorsement record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_endorsement(
        &self,
        cfi_id: i32,
        pilot_id: i32,
        endorsement_type: &str,
        flight_log_id: Option<i32>,
    ) -> Result<EndorsementModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::CfiEndorsement::insert(
            entity::cfi_endorsement::ActiveModel {
                cfi_id: ActiveValue::Set(cfi_id),
                pilot_id: ActiveValue::Set(pilot_id),
                flight_log_id: ActiveValue::Set(flight_log_id),
                endorsement_type: ActiveValue::Set(endorsement_type.to_string()),
                notes: ActiveValue::Set(None),
                endorsed_at: ActiveValue::Set(now),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
