use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Premium discount tier, ordered: None < Bronze < Silver < Gold.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    #[sea_orm(string_value = "none")]
    None,
    #[sea_orm(string_value = "bronze")]
    Bronze,
    #[sea_orm(string_value = "silver")]
    Silver,
    #[sea_orm(string_value = "gold")]
    Gold,
}

/// Scoring summary for a pilot, one row per pilot.
///
/// Score values are produced by the external scoring engine; the tier and
/// percentage columns are derived from `overall_score` through the configured
/// discount schedule and are never accepted from callers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "proficiency_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub pilot_id: i32,

    pub overall_score: i32,
    pub steep_turns_score: i32,
    pub slow_flight_score: i32,
    pub stall_recovery_score: i32,
    pub traffic_pattern_score: i32,

    pub discount_tier: DiscountTier,
    pub discount_percentage: i32,

    pub last_check_date: Option<NaiveDateTime>,
    pub next_check_due: Option<NaiveDateTime>,

    pub total_flights_verified: i32,
    pub total_maneuvers_completed: i32,

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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
