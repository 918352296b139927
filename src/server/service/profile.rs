use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::profile::UpdatePilotProfile,
    server::{
        data::{profile::ProfileRepository, user::UserRepository},
        error::{validation::ValidationError, Error},
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The user's insurance profile, or NotFound if none was ever submitted
    pub async fn get_profile(
        &self,
        user_id: i32,
    ) -> Result<entity::pilot_profile::Model, Error> {
        let profile_repository = ProfileRepository::new(self.db);

        profile_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(Error::NotFound {
                resource: "Pilot profile",
                id: user_id,
            })
    }

    /// Partial-update upsert of the user's profile.
    ///
    /// Fields present in the payload overwrite stored values; omitted fields
    /// keep them. The baseline row is created on first submission, so the
    /// merge path is the same whether or not a profile exists yet.
    pub async fn upsert_profile(
        &self,
        user_id: i32,
        update: UpdatePilotProfile,
    ) -> Result<entity::pilot_profile::Model, Error> {
        validate_update(&update)?;

        let user_repository = UserRepository::new(self.db);
        let profile_repository = ProfileRepository::new(self.db);

        // A profile must never be created for a user that does not exist
        if user_repository.get(user_id).await?.is_none() {
            return Err(Error::NotFound {
                resource: "User",
                id: user_id,
            });
        }

        let current = match profile_repository.find_by_user_id(user_id).await? {
            Some(profile) => profile,
            None => profile_repository.create_default(user_id).await?,
        };

        let mut profile = current.into_active_model();
        apply_update(&mut profile, update);
        profile.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let profile = profile_repository.update(profile).await?;

        Ok(profile)
    }
}

fn validate_update(update: &UpdatePilotProfile) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    let hour_fields = [
        ("hours_total", update.hours_total),
        ("hours_tailwheel", update.hours_tailwheel),
        ("hours_retractable", update.hours_retractable),
        ("hours_multi_engine", update.hours_multi_engine),
        ("hours_turboprop", update.hours_turboprop),
        ("hours_pressurized", update.hours_pressurized),
        ("hours_jet", update.hours_jet),
        ("hours_rotorcraft", update.hours_rotorcraft),
        ("hours_instrument_actual", update.hours_instrument_actual),
        ("hours_instrument_simulated", update.hours_instrument_simulated),
        ("hours_instructor", update.hours_instructor),
        ("hours_sea", update.hours_sea),
        ("hours_glider", update.hours_glider),
        ("hours_last12_total", update.hours_last12_total),
        ("hours_last12_tailwheel", update.hours_last12_tailwheel),
        ("hours_last12_retractable", update.hours_last12_retractable),
        ("hours_last12_multi_engine", update.hours_last12_multi_engine),
        ("hours_last12_turboprop", update.hours_last12_turboprop),
        ("hours_last12_pressurized", update.hours_last12_pressurized),
        ("hours_last12_jet", update.hours_last12_jet),
        ("hours_last12_rotorcraft", update.hours_last12_rotorcraft),
        (
            "hours_last12_instrument_actual",
            update.hours_last12_instrument_actual,
        ),
        (
            "hours_last12_instrument_simulated",
            update.hours_last12_instrument_simulated,
        ),
        ("hours_last12_instructor", update.hours_last12_instructor),
        ("hours_last12_sea", update.hours_last12_sea),
        ("hours_last12_glider", update.hours_last12_glider),
        ("hours_last90_total", update.hours_last90_total),
        ("hours_last90_tailwheel", update.hours_last90_tailwheel),
        ("hours_last90_retractable", update.hours_last90_retractable),
        ("hours_last90_multi_engine", update.hours_last90_multi_engine),
        ("hours_last90_turboprop", update.hours_last90_turboprop),
        ("hours_last90_pressurized", update.hours_last90_pressurized),
        ("hours_last90_jet", update.hours_last90_jet),
        ("hours_last90_rotorcraft", update.hours_last90_rotorcraft),
        (
            "hours_last90_instrument_actual",
            update.hours_last90_instrument_actual,
        ),
        (
            "hours_last90_instrument_simulated",
            update.hours_last90_instrument_simulated,
        ),
        ("hours_last90_instructor", update.hours_last90_instructor),
        ("hours_last90_sea", update.hours_last90_sea),
        ("hours_last90_glider", update.hours_last90_glider),
    ];

    for (field, value) in hour_fields {
        if let Some(value) = value {
            if value < 0 {
                errors.push(field, "must be non-negative");
            }
        }
    }

    let date_fields = [
        ("date_of_birth", update.date_of_birth.as_deref()),
        ("date_employed", update.date_employed.as_deref()),
        (
            "last_biennial_review_date",
            update.last_biennial_review_date.as_deref(),
        ),
        (
            "medical_certificate_date",
            update.medical_certificate_date.as_deref(),
        ),
    ];

    for (field, value) in date_fields {
        if let Some(value) = value {
            if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                errors.push(field, "must be a date in YYYY-MM-DD form");
            }
        }
    }

    if let Some(models) = &update.insured_aircraft_models {
        let all_strings = models
            .as_array()
            .is_some_and(|items| items.iter().all(|item| item.is_string()));
        if !all_strings {
            errors.push("insured_aircraft_models", "must be an array of strings");
        }
    }

    errors.into_result()
}

/// Copies every present payload field onto the active model, leaving omitted
/// columns unchanged.
fn apply_update(profile: &mut entity::pilot_profile::ActiveModel, update: UpdatePilotProfile) {
    use ActiveValue::Set;

    if let Some(value) = update.date_of_birth {
        profile.date_of_birth = Set(Some(value));
    }
    if let Some(value) = update.address {
        profile.address = Set(Some(value));
    }
    if let Some(value) = update.city {
        profile.city = Set(Some(value));
    }
    if let Some(value) = update.state {
        profile.state = Set(Some(value));
    }
    if let Some(value) = update.zip_code {
        profile.zip_code = Set(Some(value));
    }
    if let Some(value) = update.home_phone {
        profile.home_phone = Set(Some(value));
    }
    if let Some(value) = update.work_phone {
        profile.work_phone = Set(Some(value));
    }
    if let Some(value) = update.employer {
        profile.employer = Set(Some(value));
    }
    if let Some(value) = update.date_employed {
        profile.date_employed = Set(Some(value));
    }
    if let Some(value) = update.position {
        profile.position = Set(Some(value));
    }

    if let Some(value) = update.airmen_certificate_no {
        profile.airmen_certificate_no = Set(Some(value));
    }
    if let Some(value) = update.certificate_student {
        profile.certificate_student = Set(value);
    }
    if let Some(value) = update.certificate_private {
        profile.certificate_private = Set(value);
    }
    if let Some(value) = update.certificate_commercial {
        profile.certificate_commercial = Set(value);
    }
    if let Some(value) = update.certificate_atp {
        profile.certificate_atp = Set(value);
    }
    if let Some(value) = update.certificate_instructor {
        profile.certificate_instructor = Set(value);
    }

    if let Some(value) = update.rating_single_engine_land {
        profile.rating_single_engine_land = Set(value);
    }
    if let Some(value) = update.rating_multi_engine_land {
        profile.rating_multi_engine_land = Set(value);
    }
    if let Some(value) = update.rating_single_engine_sea {
        profile.rating_single_engine_sea = Set(value);
    }
    if let Some(value) = update.rating_multi_engine_sea {
        profile.rating_multi_engine_sea = Set(value);
    }
    if let Some(value) = update.rating_instrument {
        profile.rating_instrument = Set(value);
    }
    if let Some(value) = update.rating_rotorcraft {
        profile.rating_rotorcraft = Set(value);
    }
    if let Some(value) = update.rating_glider {
        profile.rating_glider = Set(value);
    }
    if let Some(value) = update.rating_lighter_than_air {
        profile.rating_lighter_than_air = Set(value);
    }
    if let Some(value) = update.rating_centerline_thrust {
        profile.rating_centerline_thrust = Set(value);
    }
    if let Some(value) = update.rating_multi_engine_instructor {
        profile.rating_multi_engine_instructor = Set(value);
    }
    if let Some(value) = update.rating_ap_mechanic {
        profile.rating_ap_mechanic = Set(value);
    }
    if let Some(value) = update.rating_aircraft_inspector {
        profile.rating_aircraft_inspector = Set(value);
    }
    if let Some(value) = update.type_ratings {
        profile.type_ratings = Set(Some(value));
    }
    if let Some(value) = update.other_ratings {
        profile.other_ratings = Set(Some(value));
    }

    if let Some(value) = update.hours_total {
        profile.hours_total = Set(value);
    }
    if let Some(value) = update.hours_tailwheel {
        profile.hours_tailwheel = Set(value);
    }
    if let Some(value) = update.hours_retractable {
        profile.hours_retractable = Set(value);
    }
    if let Some(value) = update.hours_multi_engine {
        profile.hours_multi_engine = Set(value);
    }
    if let Some(value) = update.hours_turboprop {
        profile.hours_turboprop = Set(value);
    }
    if let Some(value) = update.hours_pressurized {
        profile.hours_pressurized = Set(value);
    }
    if let Some(value) = update.hours_jet {
        profile.hours_jet = Set(value);
    }
    if let Some(value) = update.hours_rotorcraft {
        profile.hours_rotorcraft = Set(value);
    }
    if let Some(value) = update.hours_instrument_actual {
        profile.hours_instrument_actual = Set(value);
    }
    if let Some(value) = update.hours_instrument_simulated {
        profile.hours_instrument_simulated = Set(value);
    }
    if let Some(value) = update.hours_instructor {
        profile.hours_instructor = Set(value);
    }
    if let Some(value) = update.hours_sea {
        profile.hours_sea = Set(value);
    }
    if let Some(value) = update.hours_glider {
        profile.hours_glider = Set(value);
    }

    if let Some(value) = update.hours_last12_total {
        profile.hours_last12_total = Set(value);
    }
    if let Some(value) = update.hours_last12_tailwheel {
        profile.hours_last12_tailwheel = Set(value);
    }
    if let Some(value) = update.hours_last12_retractable {
        profile.hours_last12_retractable = Set(value);
    }
    if let Some(value) = update.hours_last12_multi_engine {
        profile.hours_last12_multi_engine = Set(value);
    }
    if let Some(value) = update.hours_last12_turboprop {
        profile.hours_last12_turboprop = Set(value);
    }
    if let Some(value) = update.hours_last12_pressurized {
        profile.hours_last12_pressurized = Set(value);
    }
    if let Some(value) = update.hours_last12_jet {
        profile.hours_last12_jet = Set(value);
    }
    if let Some(value) = update.hours_last12_rotorcraft {
        profile.hours_last12_rotorcraft = Set(value);
    }
    if let Some(value) = update.hours_last12_instrument_actual {
        profile.hours_last12_instrument_actual = Set(value);
    }
    if let Some(value) = update.hours_last12_instrument_simulated {
        profile.hours_last12_instrument_simulated = Set(value);
    }
    if let Some(value) = update.hours_last12_instructor {
        profile.hours_last12_instructor = Set(value);
    }
    if let Some(value) = update.hours_last12_sea {
        profile.hours_last12_sea = Set(value);
    }
    if let Some(value) = update.hours_last12_glider {
        profile.hours_last12_glider = Set(value);
    }

    if let Some(value) = update.hours_last90_total {
        profile.hours_last90_total = Set(value);
    }
    if let Some(value) = update.hours_last90_tailwheel {
        profile.hours_last90_tailwheel = Set(value);
    }
    if let Some(value) = update.hours_last90_retractable {
        profile.hours_last90_retractable = Set(value);
    }
    if let Some(value) = update.hours_last90_multi_engine {
        profile.hours_last90_multi_engine = Set(value);
    }
    if let Some(value) = update.hours_last90_turboprop {
        profile.hours_last90_turboprop = Set(value);
    }
    if let Some(value) = update.hours_last90_pressurized {
        profile.hours_last90_pressurized = Set(value);
    }
    if let Some(value) = update.hours_last90_jet {
        profile.hours_last90_jet = Set(value);
    }
    if let Some(value) = update.hours_last90_rotorcraft {
        profile.hours_last90_rotorcraft = Set(value);
    }
    if let Some(value) = update.hours_last90_instrument_actual {
        profile.hours_last90_instrument_actual = Set(value);
    }
    if let Some(value) = update.hours_last90_instrument_simulated {
        profile.hours_last90_instrument_simulated = Set(value);
    }
    if let Some(value) = update.hours_last90_instructor {
        profile.hours_last90_instructor = Set(value);
    }
    if let Some(value) = update.hours_last90_sea {
        profile.hours_last90_sea = Set(value);
    }
    if let Some(value) = update.hours_last90_glider {
        profile.hours_last90_glider = Set(value);
    }

    if let Some(value) = update.last_biennial_review_date {
        profile.last_biennial_review_date = Set(Some(value));
    }
    if let Some(value) = update.last_biennial_review_model {
        profile.last_biennial_review_model = Set(Some(value));
    }
    if let Some(value) = update.medical_certificate_class {
        profile.medical_certificate_class = Set(Some(value));
    }
    if let Some(value) = update.medical_certificate_date {
        profile.medical_certificate_date = Set(Some(value));
    }
    if let Some(disclosure) = update.medical_waivers {
        let (disclosed, details) = disclosure.into_columns();
        profile.medical_waivers_limitations = Set(disclosed);
        profile.medical_waivers_details = Set(details);
    }

    if let Some(disclosure) = update.accidents_incidents {
        let (disclosed, details) = disclosure.into_columns();
        profile.has_accidents_incidents = Set(disclosed);
        profile.accidents_incidents_details = Set(details);
    }
    if let Some(disclosure) = update.citations {
        let (disclosed, details) = disclosure.into_columns();
        profile.has_citations = Set(disclosed);
        profile.citations_details = Set(details);
    }
    if let Some(disclosure) = update.felony_conviction {
        let (disclosed, details) = disclosure.into_columns();
        profile.has_felony_conviction = Set(disclosed);
        profile.felony_conviction_details = Set(details);
    }
    if let Some(disclosure) = update.dui_arrest {
        let (disclosed, details) = disclosure.into_columns();
        profile.has_dui_arrest = Set(disclosed);
        profile.dui_arrest_details = Set(details);
    }
    if let Some(disclosure) = update.insurance_cancellation {
        let (disclosed, details) = disclosure.into_columns();
        profile.has_insurance_cancellation = Set(disclosed);
        profile.insurance_cancellation_details = Set(details);
    }
    if let Some(value) = update.has_financial_interest {
        profile.has_financial_interest = Set(value);
    }

    if let Some(value) = update.insured_aircraft_models {
        profile.insured_aircraft_models = Set(Some(value));
    }
}
