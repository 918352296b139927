use chrono::Utc;
use entity::maneuver_check::ManeuverStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct ManeuverCheckRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManeuverCheckRepository<'a> {
    /// Creates a new instance of [`ManeuverCheckRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        check_id: i32,
    ) -> Result<Option<entity::maneuver_check::Model>, DbErr> {
        entity::prelude::ManeuverCheck::find_by_id(check_id)
            .one(self.db)
            .await
    }

    /// Lists a pilot's maneuver checks, most recently detected first
    pub async fn list_by_pilot(
        &self,
        pilot_id: i32,
    ) -> Result<Vec<entity::maneuver_check::Model>, DbErr> {
        entity::prelude::ManeuverCheck::find()
            .filter(entity::maneuver_check::Column::PilotId.eq(pilot_id))
            .order_by_desc(entity::maneuver_check::Column::DetectedAt)
            .order_by_desc(entity::maneuver_check::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists every check detected within a set of flights
    pub async fn list_by_flights(
        &self,
        flight_ids: &[i32],
    ) -> Result<Vec<entity::maneuver_check::Model>, DbErr> {
        entity::prelude::ManeuverCheck::find()
            .filter(entity::maneuver_check::Column::FlightLogId.is_in(flight_ids.iter().copied()))
            .order_by_asc(entity::maneuver_check::Column::FlightLogId)
            .order_by_asc(entity::maneuver_check::Column::Id)
            .all(self.db)
            .await
    }

    /// Records a CFI's verdict on a check.
    ///
    /// The detector's score is kept unless the reviewer supplies a correction.
    /// Returns `Ok(None)` when the check does not exist.
    pub async fn review(
        &self,
        check_id: i32,
        status: ManeuverStatus,
        score: Option<i32>,
        review_notes: Option<String>,
        reviewed_by: i32,
    ) -> Result<Option<entity::maneuver_check::Model>, DbErr> {
        let check = match entity::prelude::ManeuverCheck::find_by_id(check_id)
            .one(self.db)
            .await?
        {
            Some(check) => check,
            None => return Ok(None),
        };

        let now = Utc::now().naive_utc();
        let mut check = check.into_active_model();
        check.status = ActiveValue::Set(status);
        if let Some(score) = score {
            check.score = ActiveValue::Set(Some(score));
        }
        check.review_notes = ActiveValue::Set(review_notes);
        check.reviewed_by = ActiveValue::Set(Some(reviewed_by));
        check.reviewed_at = ActiveValue::Set(Some(now));
        check.updated_at = ActiveValue::Set(now);

        let check = check.update(self.db).await?;

        Ok(Some(check))
    }
}
