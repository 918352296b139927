use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::cfi_student_relationship::STATUS_ACTIVE;

pub struct RelationshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationshipRepository<'a> {
    /// Creates a new instance of [`RelationshipRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active relationship starting now.
    ///
    /// Uniqueness of the active pair is the caller's concern; ended duplicates
    /// are legal history.
    pub async fn create(
        &self,
        cfi_id: i32,
        student_id: i32,
    ) -> Result<entity::cfi_student_relationship::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let relationship = entity::cfi_student_relationship::ActiveModel {
            cfi_id: ActiveValue::Set(cfi_id),
            student_id: ActiveValue::Set(student_id),
            status: ActiveValue::Set(STATUS_ACTIVE.to_string()),
            start_date: ActiveValue::Set(now),
            end_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        relationship.insert(self.db).await
    }

    /// The active relationship between a CFI and a student, if one exists
    pub async fn find_active(
        &self,
        cfi_id: i32,
        student_id: i32,
    ) -> Result<Option<entity::cfi_student_relationship::Model>, DbErr> {
        entity::prelude::CfiStudentRelationship::find()
            .filter(entity::cfi_student_relationship::Column::CfiId.eq(cfi_id))
            .filter(entity::cfi_student_relationship::Column::StudentId.eq(student_id))
            .filter(entity::cfi_student_relationship::Column::Status.eq(STATUS_ACTIVE))
            .one(self.db)
            .await
    }

    /// Lists a CFI's active relationships, most recently started first
    pub async fn list_active_by_cfi(
        &self,
        cfi_id: i32,
    ) -> Result<Vec<entity::cfi_student_relationship::Model>, DbErr> {
        entity::prelude::CfiStudentRelationship::find()
            .filter(entity::cfi_student_relationship::Column::CfiId.eq(cfi_id))
            .filter(entity::cfi_student_relationship::Column::Status.eq(STATUS_ACTIVE))
            .order_by_desc(entity::cfi_student_relationship::Column::StartDate)
            .order_by_desc(entity::cfi_student_relationship::Column::Id)
            .all(self.db)
            .await
    }
}
