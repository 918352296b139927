use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review state of a submitted flight.
///
/// `Pending` is the only non-terminal state; a flight moves to `Verified` or
/// `Rejected` exactly once, by explicit CFI action, and never back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "verified")]
    Verified,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pilot_id: i32,

    pub flight_date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub aircraft_tail_number: String,
    pub aircraft_type: String,
    /// Duration in hours, fractional.
    pub flight_duration: Option<f32>,

    /// Identifier in the external flight-tracking service, when matched.
    pub tracking_ref: Option<String>,
    pub verification_status: VerificationStatus,
    pub verified_at: Option<NaiveDateTime>,
    /// Id of the verifying CFI. Intentionally not a foreign key so the
    /// verification record survives deletion of the CFI account.
    pub verified_by: Option<i32>,

    pub notes: Option<String>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PilotId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::maneuver_check::Entity")]
    ManeuverCheck,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::maneuver_check::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManeuverCheck.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
