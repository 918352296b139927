use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform role of an account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Pilot seeking coverage; the default for new accounts.
    #[sea_orm(string_value = "pilot")]
    Pilot,

    /// Certified flight instructor; may verify flights and issue endorsements.
    #[sea_orm(string_value = "cfi")]
    Cfi,

    /// Platform administrator.
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Login email; absent on accounts provisioned by an external identity provider.
    #[sea_orm(unique)]
    pub email: Option<String>,

    /// Argon2 password hash; absent on externally provisioned accounts.
    pub password: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: UserRole,

    /// FAA certificate number; meaningful when role is cfi.
    pub cfi_number: Option<String>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::pilot_profile::Entity")]
    PilotProfile,
    #[sea_orm(has_many = "super::flight_log::Entity")]
    FlightLog,
    #[sea_orm(has_one = "super::proficiency_score::Entity")]
    ProficiencyScore,
}

impl Related<super::pilot_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PilotProfile.def()
    }
}

impl Related<super::flight_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightLog.def()
    }
}

impl Related<super::proficiency_score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProficiencyScore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
