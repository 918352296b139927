use chrono::NaiveDateTime;
use entity::maneuver_check::{ManeuverStatus, ManeuverType};
use serde::{Deserialize, Serialize};

/// A detected maneuver with its flight-dynamics measurements and review state.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ManeuverCheckDto {
    pub id: i32,
    pub flight_log_id: i32,
    pub pilot_id: i32,
    #[schema(value_type = String)]
    pub maneuver_type: ManeuverType,
    #[schema(value_type = String)]
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

impl From<entity::maneuver_check::Model> for ManeuverCheckDto {
    fn from(check: entity::maneuver_check::Model) -> Self {
        Self {
            id: check.id,
            flight_log_id: check.flight_log_id,
            pilot_id: check.pilot_id,
            maneuver_type: check.maneuver_type,
            status: check.status,
            score: check.score,
            bank_angle: check.bank_angle,
            altitude_deviation: check.altitude_deviation,
            speed_deviation: check.speed_deviation,
            heading_deviation: check.heading_deviation,
            detected_at: check.detected_at,
            latitude: check.latitude,
            longitude: check.longitude,
            reviewed_by: check.reviewed_by,
            reviewed_at: check.reviewed_at,
            review_notes: check.review_notes,
            created_at: check.created_at,
            updated_at: check.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ManeuverChecksDto {
    pub maneuvers: Vec<ManeuverCheckDto>,
}

/// CFI verdict on a detected maneuver.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewManeuverRequest {
    /// `passed`, `failed` or `needs_review`
    #[schema(value_type = String)]
    pub status: ManeuverStatus,
    /// Graded quality of the maneuver, 0 to 100
    pub score: Option<i32>,
    pub review_notes: Option<String>,
}
