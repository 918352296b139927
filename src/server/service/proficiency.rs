use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::server::{
    config::TierSchedule,
    data::{proficiency::ProficiencyRepository, user::UserRepository},
    error::Error,
};

/// Scoring values produced by the external scoring engine.
///
/// Tier and discount are deliberately absent: they are derived here from the
/// configured schedule and cannot be supplied by a caller.
pub struct ScoreIngest {
    pub overall_score: i32,
    pub steep_turns_score: i32,
    pub slow_flight_score: i32,
    pub stall_recovery_score: i32,
    pub traffic_pattern_score: i32,
    pub total_flights_verified: i32,
    pub total_maneuvers_completed: i32,
    pub next_check_due: Option<NaiveDateTime>,
}

pub struct ProficiencyService<'a> {
    db: &'a DatabaseConnection,
    schedule: &'a TierSchedule,
}

impl<'a> ProficiencyService<'a> {
    /// Creates a new instance of [`ProficiencyService`]
    pub fn new(db: &'a DatabaseConnection, schedule: &'a TierSchedule) -> Self {
        Self { db, schedule }
    }

    /// The pilot's scoring row, created zeroed on first access.
    ///
    /// A pilot who has never been scored reads as zero scores, no tier and no
    /// discount rather than as an absent record.
    pub async fn get_or_create(
        &self,
        pilot_id: i32,
    ) -> Result<entity::proficiency_score::Model, Error> {
        let user_repository = UserRepository::new(self.db);
        let proficiency_repository = ProficiencyRepository::new(self.db);

        if let Some(score) = proficiency_repository.find_by_pilot_id(pilot_id).await? {
            return Ok(score);
        }

        if user_repository.get(pilot_id).await?.is_none() {
            return Err(Error::NotFound {
                resource: "User",
                id: pilot_id,
            });
        }

        let score = proficiency_repository.create_zeroed(pilot_id).await?;

        Ok(score)
    }

    /// Write seam for the external scoring engine.
    ///
    /// Scores are clamped to the 0 to 100 scale, the discount tier and
    /// percentage are derived from the configured schedule, and the check
    /// date is stamped with the ingestion time.
    pub async fn ingest(
        &self,
        pilot_id: i32,
        ingest: ScoreIngest,
    ) -> Result<entity::proficiency_score::Model, Error> {
        let proficiency_repository = ProficiencyRepository::new(self.db);

        let current = self.get_or_create(pilot_id).await?;

        let overall_score = clamp_score(ingest.overall_score);
        let (tier, discount) = self.schedule.tier_for(overall_score);

        let now = Utc::now().naive_utc();
        let mut score = current.into_active_model();
        score.overall_score = ActiveValue::Set(overall_score);
        score.steep_turns_score = ActiveValue::Set(clamp_score(ingest.steep_turns_score));
        score.slow_flight_score = ActiveValue::Set(clamp_score(ingest.slow_flight_score));
        score.stall_recovery_score = ActiveValue::Set(clamp_score(ingest.stall_recovery_score));
        score.traffic_pattern_score = ActiveValue::Set(clamp_score(ingest.traffic_pattern_score));
        score.discount_tier = ActiveValue::Set(tier);
        score.discount_percentage = ActiveValue::Set(discount);
        score.last_check_date = ActiveValue::Set(Some(now));
        score.next_check_due = ActiveValue::Set(ingest.next_check_due);
        score.total_flights_verified = ActiveValue::Set(ingest.total_flights_verified);
        score.total_maneuvers_completed = ActiveValue::Set(ingest.total_maneuvers_completed);
        score.updated_at = ActiveValue::Set(now);

        let score = proficiency_repository.update(score).await?;

        Ok(score)
    }
}

fn clamp_score(score: i32) -> i32 {
    score.clamp(0, 100)
}
