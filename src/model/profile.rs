use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wire form of a [`Disclosure`] answer.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DisclosureWire {
    /// Whether the applicant answered yes to the disclosure question
    pub disclosed: bool,
    /// Free-text explanation; only meaningful when `disclosed` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Answer to a boolean-gated disclosure question on the insurance application.
///
/// Details cannot exist without an affirmative answer: a payload carrying
/// `disclosed: false` together with details deserializes to [`Disclosure::No`]
/// and the details are discarded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "DisclosureWire", into = "DisclosureWire")]
pub enum Disclosure {
    No,
    Yes { details: Option<String> },
}

impl Disclosure {
    /// Builds a disclosure from its stored column pair.
    pub fn from_columns(disclosed: bool, details: Option<String>) -> Self {
        if disclosed {
            Self::Yes { details }
        } else {
            Self::No
        }
    }

    pub fn disclosed(&self) -> bool {
        matches!(self, Self::Yes { .. })
    }

    /// The stored column pair for this answer.
    pub fn into_columns(self) -> (bool, Option<String>) {
        match self {
            Self::No => (false, None),
            Self::Yes { details } => (true, details),
        }
    }
}

impl From<DisclosureWire> for Disclosure {
    fn from(wire: DisclosureWire) -> Self {
        if wire.disclosed {
            Self::Yes {
                details: wire.details,
            }
        } else {
            Self::No
        }
    }
}

impl From<Disclosure> for DisclosureWire {
    fn from(disclosure: Disclosure) -> Self {
        match disclosure {
            Disclosure::No => Self {
                disclosed: false,
                details: None,
            },
            Disclosure::Yes { details } => Self {
                disclosed: true,
                details,
            },
        }
    }
}

/// A pilot's insurance application profile.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PilotProfileDto {
    pub id: i32,
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
    #[schema(value_type = DisclosureWire)]
    pub medical_waivers: Disclosure,

    #[schema(value_type = DisclosureWire)]
    pub accidents_incidents: Disclosure,
    #[schema(value_type = DisclosureWire)]
    pub citations: Disclosure,
    #[schema(value_type = DisclosureWire)]
    pub felony_conviction: Disclosure,
    #[schema(value_type = DisclosureWire)]
    pub dui_arrest: Disclosure,
    #[schema(value_type = DisclosureWire)]
    pub insurance_cancellation: Disclosure,
    pub has_financial_interest: bool,

    /// Aircraft models the applicant wants covered, as a JSON array of strings
    #[schema(value_type = Option<Vec<String>>)]
    pub insured_aircraft_models: Option<serde_json::Value>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::pilot_profile::Model> for PilotProfileDto {
    fn from(p: entity::pilot_profile::Model) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            date_of_birth: p.date_of_birth,
            address: p.address,
            city: p.city,
            state: p.state,
            zip_code: p.zip_code,
            home_phone: p.home_phone,
            work_phone: p.work_phone,
            employer: p.employer,
            date_employed: p.date_employed,
            position: p.position,
            airmen_certificate_no: p.airmen_certificate_no,
            certificate_student: p.certificate_student,
            certificate_private: p.certificate_private,
            certificate_commercial: p.certificate_commercial,
            certificate_atp: p.certificate_atp,
            certificate_instructor: p.certificate_instructor,
            rating_single_engine_land: p.rating_single_engine_land,
            rating_multi_engine_land: p.rating_multi_engine_land,
            rating_single_engine_sea: p.rating_single_engine_sea,
            rating_multi_engine_sea: p.rating_multi_engine_sea,
            rating_instrument: p.rating_instrument,
            rating_rotorcraft: p.rating_rotorcraft,
            rating_glider: p.rating_glider,
            rating_lighter_than_air: p.rating_lighter_than_air,
            rating_centerline_thrust: p.rating_centerline_thrust,
            rating_multi_engine_instructor: p.rating_multi_engine_instructor,
            rating_ap_mechanic: p.rating_ap_mechanic,
            rating_aircraft_inspector: p.rating_aircraft_inspector,
            type_ratings: p.type_ratings,
            other_ratings: p.other_ratings,
            hours_total: p.hours_total,
            hours_tailwheel: p.hours_tailwheel,
            hours_retractable: p.hours_retractable,
            hours_multi_engine: p.hours_multi_engine,
            hours_turboprop: p.hours_turboprop,
            hours_pressurized: p.hours_pressurized,
            hours_jet: p.hours_jet,
            hours_rotorcraft: p.hours_rotorcraft,
            hours_instrument_actual: p.hours_instrument_actual,
            hours_instrument_simulated: p.hours_instrument_simulated,
            hours_instructor: p.hours_instructor,
            hours_sea: p.hours_sea,
            hours_glider: p.hours_glider,
            hours_last12_total: p.hours_last12_total,
            hours_last12_tailwheel: p.hours_last12_tailwheel,
            hours_last12_retractable: p.hours_last12_retractable,
            hours_last12_multi_engine: p.hours_last12_multi_engine,
            hours_last12_turboprop: p.hours_last12_turboprop,
            hours_last12_pressurized: p.hours_last12_pressurized,
            hours_last12_jet: p.hours_last12_jet,
            hours_last12_rotorcraft: p.hours_last12_rotorcraft,
            hours_last12_instrument_actual: p.hours_last12_instrument_actual,
            hours_last12_instrument_simulated: p.hours_last12_instrument_simulated,
            hours_last12_instructor: p.hours_last12_instructor,
            hours_last12_sea: p.hours_last12_sea,
            hours_last12_glider: p.hours_last12_glider,
            hours_last90_total: p.hours_last90_total,
            hours_last90_tailwheel: p.hours_last90_tailwheel,
            hours_last90_retractable: p.hours_last90_retractable,
            hours_last90_multi_engine: p.hours_last90_multi_engine,
            hours_last90_turboprop: p.hours_last90_turboprop,
            hours_last90_pressurized: p.hours_last90_pressurized,
            hours_last90_jet: p.hours_last90_jet,
            hours_last90_rotorcraft: p.hours_last90_rotorcraft,
            hours_last90_instrument_actual: p.hours_last90_instrument_actual,
            hours_last90_instrument_simulated: p.hours_last90_instrument_simulated,
            hours_last90_instructor: p.hours_last90_instructor,
            hours_last90_sea: p.hours_last90_sea,
            hours_last90_glider: p.hours_last90_glider,
            last_biennial_review_date: p.last_biennial_review_date,
            last_biennial_review_model: p.last_biennial_review_model,
            medical_certificate_class: p.medical_certificate_class,
            medical_certificate_date: p.medical_certificate_date,
            medical_waivers: Disclosure::from_columns(
                p.medical_waivers_limitations,
                p.medical_waivers_details,
            ),
            accidents_incidents: Disclosure::from_columns(
                p.has_accidents_incidents,
                p.accidents_incidents_details,
            ),
            citations: Disclosure::from_columns(p.has_citations, p.citations_details),
            felony_conviction: Disclosure::from_columns(
                p.has_felony_conviction,
                p.felony_conviction_details,
            ),
            dui_arrest: Disclosure::from_columns(p.has_dui_arrest, p.dui_arrest_details),
            insurance_cancellation: Disclosure::from_columns(
                p.has_insurance_cancellation,
                p.insurance_cancellation_details,
            ),
            has_financial_interest: p.has_financial_interest,
            insured_aircraft_models: p.insured_aircraft_models,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Partial-update payload for the pilot profile.
///
/// Every field is optional: omitted fields keep their stored values, present
/// fields overwrite them. Submitting the same payload twice is a no-op the
/// second time.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePilotProfile {
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
    pub certificate_student: Option<bool>,
    pub certificate_private: Option<bool>,
    pub certificate_commercial: Option<bool>,
    pub certificate_atp: Option<bool>,
    pub certificate_instructor: Option<bool>,

    pub rating_single_engine_land: Option<bool>,
    pub rating_multi_engine_land: Option<bool>,
    pub rating_single_engine_sea: Option<bool>,
    pub rating_multi_engine_sea: Option<bool>,
    pub rating_instrument: Option<bool>,
    pub rating_rotorcraft: Option<bool>,
    pub rating_glider: Option<bool>,
    pub rating_lighter_than_air: Option<bool>,
    pub rating_centerline_thrust: Option<bool>,
    pub rating_multi_engine_instructor: Option<bool>,
    pub rating_ap_mechanic: Option<bool>,
    pub rating_aircraft_inspector: Option<bool>,
    pub type_ratings: Option<String>,
    pub other_ratings: Option<String>,

    pub hours_total: Option<i32>,
    pub hours_tailwheel: Option<i32>,
    pub hours_retractable: Option<i32>,
    pub hours_multi_engine: Option<i32>,
    pub hours_turboprop: Option<i32>,
    pub hours_pressurized: Option<i32>,
    pub hours_jet: Option<i32>,
    pub hours_rotorcraft: Option<i32>,
    pub hours_instrument_actual: Option<i32>,
    pub hours_instrument_simulated: Option<i32>,
    pub hours_instructor: Option<i32>,
    pub hours_sea: Option<i32>,
    pub hours_glider: Option<i32>,

    pub hours_last12_total: Option<i32>,
    pub hours_last12_tailwheel: Option<i32>,
    pub hours_last12_retractable: Option<i32>,
    pub hours_last12_multi_engine: Option<i32>,
    pub hours_last12_turboprop: Option<i32>,
    pub hours_last12_pressurized: Option<i32>,
    pub hours_last12_jet: Option<i32>,
    pub hours_last12_rotorcraft: Option<i32>,
    pub hours_last12_instrument_actual: Option<i32>,
    pub hours_last12_instrument_simulated: Option<i32>,
    pub hours_last12_instructor: Option<i32>,
    pub hours_last12_sea: Option<i32>,
    pub hours_last12_glider: Option<i32>,

    pub hours_last90_total: Option<i32>,
    pub hours_last90_tailwheel: Option<i32>,
    pub hours_last90_retractable: Option<i32>,
    pub hours_last90_multi_engine: Option<i32>,
    pub hours_last90_turboprop: Option<i32>,
    pub hours_last90_pressurized: Option<i32>,
    pub hours_last90_jet: Option<i32>,
    pub hours_last90_rotorcraft: Option<i32>,
    pub hours_last90_instrument_actual: Option<i32>,
    pub hours_last90_instrument_simulated: Option<i32>,
    pub hours_last90_instructor: Option<i32>,
    pub hours_last90_sea: Option<i32>,
    pub hours_last90_glider: Option<i32>,

    pub last_biennial_review_date: Option<String>,
    pub last_biennial_review_model: Option<String>,
    pub medical_certificate_class: Option<String>,
    pub medical_certificate_date: Option<String>,
    #[schema(value_type = Option<DisclosureWire>)]
    pub medical_waivers: Option<Disclosure>,

    #[schema(value_type = Option<DisclosureWire>)]
    pub accidents_incidents: Option<Disclosure>,
    #[schema(value_type = Option<DisclosureWire>)]
    pub citations: Option<Disclosure>,
    #[schema(value_type = Option<DisclosureWire>)]
    pub felony_conviction: Option<Disclosure>,
    #[schema(value_type = Option<DisclosureWire>)]
    pub dui_arrest: Option<Disclosure>,
    #[schema(value_type = Option<DisclosureWire>)]
    pub insurance_cancellation: Option<Disclosure>,
    pub has_financial_interest: Option<bool>,

    #[schema(value_type = Option<Vec<String>>)]
    pub insured_aircraft_models: Option<serde_json::Value>,
}
