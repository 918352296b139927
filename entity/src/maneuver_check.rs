use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maneuver recognized by the external telemetry detection engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum ManeuverType {
    #[sea_orm(string_value = "steep_turns")]
    SteepTurns,
    #[sea_orm(string_value = "slow_flight")]
    SlowFlight,
    #[sea_orm(string_value = "stall_recovery")]
    StallRecovery,
    #[sea_orm(string_value = "traffic_pattern")]
    TrafficPattern,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum ManeuverStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "passed")]
    Passed,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "needs_review")]
    NeedsReview,
}

/// A single detected maneuver within a flight, with the flight-dynamics
/// measurements the detection engine extracted and the CFI's review verdict.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maneuver_checks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flight_log_id: i32,
    /// Denormalized from the flight log for per-pilot queries.
    pub pilot_id: i32,

    pub maneuver_type: ManeuverType,
    pub status: ManeuverStatus,
    pub score: Option<i32>,

    pub bank_angle: Option<f32>,
    pub altitude_deviation: Option<f32>,
    pub speed_deviation: Option<f32>,
    pub heading_deviation: Option<f32>,

    pub detected_at: Option<NaiveDateTime>,
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,

    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub review_notes: Option<String>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight_log::Entity",
        from = "Column::FlightLogId",
        to = "super::flight_log::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FlightLog,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PilotId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Pilot,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewedBy",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Reviewer,
}

impl Related<super::flight_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
