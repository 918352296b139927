use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::proficiency_score::DiscountTier;

pub struct ProficiencyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProficiencyRepository<'a> {
    /// Creates a new instance of [`ProficiencyRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_pilot_id(
        &self,
        pilot_id: i32,
    ) -> Result<Option<entity::proficiency_score::Model>, DbErr> {
        entity::prelude::ProficiencyScore::find()
            .filter(entity::proficiency_score::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await
    }

    /// Fetches the scoring rows for a set of pilots; pilots without one are skipped
    pub async fn list_by_pilot_ids(
        &self,
        pilot_ids: &[i32],
    ) -> Result<Vec<entity::proficiency_score::Model>, DbErr> {
        entity::prelude::ProficiencyScore::find()
            .filter(entity::proficiency_score::Column::PilotId.is_in(pilot_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Creates the zeroed scoring row a pilot starts with: no scores, no tier,
    /// no discount.
    pub async fn create_zeroed(
        &self,
        pilot_id: i32,
    ) -> Result<entity::proficiency_score::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let score = entity::proficiency_score::ActiveModel {
            pilot_id: ActiveValue::Set(pilot_id),
            overall_score: ActiveValue::Set(0),
            steep_turns_score: ActiveValue::Set(0),
            slow_flight_score: ActiveValue::Set(0),
            stall_recovery_score: ActiveValue::Set(0),
            traffic_pattern_score: ActiveValue::Set(0),
            discount_tier: ActiveValue::Set(DiscountTier::None),
            discount_percentage: ActiveValue::Set(0),
            last_check_date: ActiveValue::Set(None),
            next_check_due: ActiveValue::Set(None),
            total_flights_verified: ActiveValue::Set(0),
            total_maneuvers_completed: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        score.insert(self.db).await
    }

    /// Persists changed columns of an existing scoring row; the primary key must be set
    pub async fn update(
        &self,
        score: entity::proficiency_score::ActiveModel,
    ) -> Result<entity::proficiency_score::Model, DbErr> {
        score.update(self.db).await
    }
}
