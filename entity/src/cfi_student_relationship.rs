use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status value for a relationship that is currently in effect. The column is
/// an open vocabulary; this is the only value the platform writes today.
pub const STATUS_ACTIVE: &str = "active";

/// Instruction relationship between a CFI and a student pilot.
///
/// A (cfi, student) pair may accumulate many historical rows but only one
/// with an active status at a time; enforced at the service layer since
/// ended duplicates are legal.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cfi_student_relationships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cfi_id: i32,
    pub student_id: i32,

    pub status: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CfiId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Cfi,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
