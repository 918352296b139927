use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Endorsement issued by a CFI to a pilot, optionally tied to a flight.
///
/// Append-only: rows are never updated or deleted through the platform.
/// A mistaken endorsement is corrected by issuing a superseding record,
/// so there is no `updated_at` column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cfi_endorsements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cfi_id: i32,
    pub pilot_id: i32,
    pub flight_log_id: Option<i32>,

    pub endorsement_type: String,
    pub notes: Option<String>,

    pub endorsed_at: NaiveDateTime,

    pub created_at: NaiveDateTime,
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
        from = "Column::PilotId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Pilot,
    #[sea_orm(
        belongs_to = "super::flight_log::Entity",
        from = "Column::FlightLogId",
        to = "super::flight_log::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FlightLog,
}

impl Related<super::flight_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
