use chrono::NaiveDateTime;
use entity::proficiency_score::DiscountTier;
use serde::{Deserialize, Serialize};

/// A pilot's proficiency summary and the premium discount it earns.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProficiencyScoreDto {
    pub id: i32,
    pub pilot_id: i32,
    pub overall_score: i32,
    pub steep_turns_score: i32,
    pub slow_flight_score: i32,
    pub stall_recovery_score: i32,
    pub traffic_pattern_score: i32,
    #[schema(value_type = String)]
    pub discount_tier: DiscountTier,
    pub discount_percentage: i32,
    pub last_check_date: Option<NaiveDateTime>,
    pub next_check_due: Option<NaiveDateTime>,
    pub total_flights_verified: i32,
    pub total_maneuvers_completed: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::proficiency_score::Model> for ProficiencyScoreDto {
    fn from(score: entity::proficiency_score::Model) -> Self {
        Self {
            id: score.id,
            pilot_id: score.pilot_id,
            overall_score: score.overall_score,
            steep_turns_score: score.steep_turns_score,
            slow_flight_score: score.slow_flight_score,
            stall_recovery_score: score.stall_recovery_score,
            traffic_pattern_score: score.traffic_pattern_score,
            discount_tier: score.discount_tier,
            discount_percentage: score.discount_percentage,
            last_check_date: score.last_check_date,
            next_check_due: score.next_check_due,
            total_flights_verified: score.total_flights_verified,
            total_maneuvers_completed: score.total_maneuvers_completed,
            created_at: score.created_at,
            updated_at: score.updated_at,
        }
    }
}
