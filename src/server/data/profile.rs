use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::pilot_profile::Model>, DbErr> {
        entity::prelude::PilotProfile::find()
            .filter(entity::pilot_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Creates the baseline profile row for a user: every counter at zero,
    /// every flag false, every optional field empty.
    pub async fn create_default(
        &self,
        user_id: i32,
    ) -> Result<entity::pilot_profile::Model, DbErr> {
        use entity::pilot_profile::ActiveModel;
        use ActiveValue::Set;

        let now = Utc::now().naive_utc();
        let profile = ActiveModel {
            user_id: Set(user_id),

            date_of_birth: Set(None),
            address: Set(None),
            city: Set(None),
            state: Set(None),
            zip_code: Set(None),
            home_phone: Set(None),
            work_phone: Set(None),
            employer: Set(None),
            date_employed: Set(None),
            position: Set(None),

            airmen_certificate_no: Set(None),
            certificate_student: Set(false),
            certificate_private: Set(false),
            certificate_commercial: Set(false),
            certificate_atp: Set(false),
            certificate_instructor: Set(false),

            rating_single_engine_land: Set(false),
            rating_multi_engine_land: Set(false),
            rating_single_engine_sea: Set(false),
            rating_multi_engine_sea: Set(false),
            rating_instrument: Set(false),
            rating_rotorcraft: Set(false),
            rating_glider: Set(false),
            rating_lighter_than_air: Set(false),
            rating_centerline_thrust: Set(false),
            rating_multi_engine_instructor: Set(false),
            rating_ap_mechanic: Set(false),
            rating_aircraft_inspector: Set(false),
            type_ratings: Set(None),
            other_ratings: Set(None),

            hours_total: Set(0),
            hours_tailwheel: Set(0),
            hours_retractable: Set(0),
            hours_multi_engine: Set(0),
            hours_turboprop: Set(0),
            hours_pressurized: Set(0),
            hours_jet: Set(0),
            hours_rotorcraft: Set(0),
            hours_instrument_actual: Set(0),
            hours_instrument_simulated: Set(0),
            hours_instructor: Set(0),
            hours_sea: Set(0),
            hours_glider: Set(0),

            hours_last12_total: Set(0),
            hours_last12_tailwheel: Set(0),
            hours_last12_retractable: Set(0),
            hours_last12_multi_engine: Set(0),
            hours_last12_turboprop: Set(0),
            hours_last12_pressurized: Set(0),
            hours_last12_jet: Set(0),
            hours_last12_rotorcraft: Set(0),
            hours_last12_instrument_actual: Set(0),
            hours_last12_instrument_simulated: Set(0),
            hours_last12_instructor: Set(0),
            hours_last12_sea: Set(0),
            hours_last12_glider: Set(0),

            hours_last90_total: Set(0),
            hours_last90_tailwheel: Set(0),
            hours_last90_retractable: Set(0),
            hours_last90_multi_engine: Set(0),
            hours_last90_turboprop: Set(0),
            hours_last90_pressurized: Set(0),
            hours_last90_jet: Set(0),
            hours_last90_rotorcraft: Set(0),
            hours_last90_instrument_actual: Set(0),
            hours_last90_instrument_simulated: Set(0),
            hours_last90_instructor: Set(0),
            hours_last90_sea: Set(0),
            hours_last90_glider: Set(0),

            last_biennial_review_date: Set(None),
            last_biennial_review_model: Set(None),
            medical_certificate_class: Set(None),
            medical_certificate_date: Set(None),
            medical_waivers_limitations: Set(false),
            medical_waivers_details: Set(None),

            has_accidents_incidents: Set(false),
            accidents_incidents_details: Set(None),
            has_citations: Set(false),
            citations_details: Set(None),
            has_felony_conviction: Set(false),
            felony_conviction_details: Set(None),
            has_dui_arrest: Set(false),
            dui_arrest_details: Set(None),
            has_insurance_cancellation: Set(false),
            insurance_cancellation_details: Set(None),
            has_financial_interest: Set(false),

            insured_aircraft_models: Set(None),

            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    /// Persists changed columns of an existing profile; the primary key must be set
    pub async fn update(
        &self,
        profile: entity::pilot_profile::ActiveModel,
    ) -> Result<entity::pilot_profile::Model, DbErr> {
        profile.update(self.db).await
    }
}
