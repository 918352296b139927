//! Proficiency score database insertion utilities.

use chrono::Utc;
use entity::proficiency_score::DiscountTier;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::proficiency::ProficiencyFixtures, model::ProficiencyScoreModel};

impl<'a> ProficiencyFixtures<'a> {
    /// Insert a scoring summary for a pilot.
    ///
    /// Per-maneuver scores are set to the overall score; pass the tier and discount
    /// that match the schedule under test.
    ///
    /// # Arguments
    /// - `pilot_id` - The pilot being summarized; the account must already exist
    /// - `overall_score` - Overall proficiency score, 0 to 100
    /// - `tier` - Discount tier to record
    /// - `discount_percentage` - Discount percentage to record
    ///
    /// # Returns
    /// - `Ok(ProficiencyScoreModel)` - The created scoring record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_score(
        &self,
        pilot_id: i32,
        overall_score: i32,
        tier: DiscountTier,
        discount_percentage: i32,
    ) -> Result<ProficiencyScoreModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::ProficiencyScore::insert(
            entity::proficiency_score::ActiveModel {
                pilot_id: ActiveValue::Set(pilot_id),
                overall_score: ActiveValue::Set(overall_score),
                steep_turns_score: ActiveValue::Set(overall_score),
                slow_flight_score: ActiveValue::Set(overall_score),
                stall_recovery_score: ActiveValue::Set(overall_score),
                traffic_pattern_score: ActiveValue::Set(overall_score),
                discount_tier: ActiveValue::Set(tier),
                discount_percentage: ActiveValue::Set(discount_percentage),
                last_check_date: ActiveValue::Set(Some(now)),
                next_check_due: ActiveValue::Set(None),
                total_flights_verified: ActiveValue::Set(0),
                total_maneuvers_completed: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
