use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Insurance application profile, one per pilot.
///
/// Date-like columns (`date_of_birth`, `date_employed`, biennial/medical dates)
/// are stored as `YYYY-MM-DD` strings validated at the API boundary.
/// Each `has_*`/`*_details` pair is gated: the details column is only
/// meaningful while its boolean is true.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pilot_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,

    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub employer: Option<String>,
    pub date_employed: Option<String>,
    pub position: Option<String>,

    pub airmen_certificate_no: Option<String>,
    pub certificate_student: bool,
    pub certificate_private: bool,
    pub certificate_commercial: bool,
    pub certificate_atp: bool,
    pub certificate_instructor: bool,

    pub rating_single_engine_land: bool,
    pub rating_multi_engine_land: bool,
    pub rating_single_engine_sea: bool,
    pub rating_multi_engine_sea: bool,
    pub rating_instrument: bool,
    pub rating_rotorcraft: bool,
    pub rating_glider: bool,
    pub rating_lighter_than_air: bool,
    pub rating_centerline_thrust: bool,
    pub rating_multi_engine_instructor: bool,
    pub rating_ap_mechanic: bool,
    pub rating_aircraft_inspector: bool,
    pub type_ratings: Option<String>,
    pub other_ratings: Option<String>,

    pub hours_total: i32,
    pub hours_tailwheel: i32,
    pub hours_retractable: i32,
    pub hours_multi_engine: i32,
    pub hours_turboprop: i32,
    pub hours_pressurized: i32,
    pub hours_jet: i32,
    pub hours_rotorcraft: i32,
    pub hours_instrument_actual: i32,
    pub hours_instrument_simulated: i32,
    pub hours_instructor: i32,
    pub hours_sea: i32,
    pub hours_glider: i32,

    pub hours_last12_total: i32,
    pub hours_last12_tailwheel: i32,
    pub hours_last12_retractable: i32,
    pub hours_last12_multi_engine: i32,
    pub hours_last12_turboprop: i32,
    pub hours_last12_pressurized: i32,
    pub hours_last12_jet: i32,
    pub hours_last12_rotorcraft: i32,
    pub hours_last12_instrument_actual: i32,
    pub hours_last12_instrument_simulated: i32,
    pub hours_last12_instructor: i32,
    pub hours_last12_sea: i32,
    pub hours_last12_glider: i32,

    pub hours_last90_total: i32,
    pub hours_last90_tailwheel: i32,
    pub hours_last90_retractable: i32,
    pub hours_last90_multi_engine: i32,
    pub hours_last90_turboprop: i32,
    pub hours_last90_pressurized: i32,
    pub hours_last90_jet: i32,
    pub hours_last90_rotorcraft: i32,
    pub hours_last90_instrument_actual: i32,
    pub hours_last90_instrument_simulated: i32,
    pub hours_last90_instructor: i32,
    pub hours_last90_sea: i32,
    pub hours_last90_glider: i32,

    pub last_biennial_review_date: Option<String>,
    pub last_biennial_review_model: Option<String>,
    pub medical_certificate_class: Option<String>,
    pub medical_certificate_date: Option<String>,
    pub medical_waivers_limitations: bool,
    pub medical_waivers_details: Option<String>,

    pub has_accidents_incidents: bool,
    pub accidents_incidents_details: Option<String>,
    pub has_citations: bool,
    pub citations_details: Option<String>,
    pub has_felony_conviction: bool,
    pub felony_conviction_details: Option<String>,
    pub has_dui_arrest: bool,
    pub dui_arrest_details: Option<String>,
    pub has_insurance_cancellation: bool,
    pub insurance_cancellation_details: Option<String>,
    pub has_financial_interest: bool,

    /// Aircraft models the applicant wants covered, as a JSON array of strings.
    pub insured_aircraft_models: Option<Json>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
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
