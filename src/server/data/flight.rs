use chrono::{NaiveDate, Utc};
use entity::flight_log::VerificationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Column values for a flight entering the verification queue.
pub struct NewFlightLog {
    pub pilot_id: i32,
    pub flight_date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub aircraft_tail_number: String,
    pub aircraft_type: String,
    pub flight_duration: Option<f32>,
    pub tracking_ref: Option<String>,
    pub notes: Option<String>,
}

pub struct FlightLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightLogRepository<'a> {
    /// Creates a new instance of [`FlightLogRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a flight log in the pending state.
    ///
    /// The verification state is fixed here rather than taken from the caller;
    /// a flight can only become verified through [`Self::resolve`].
    pub async fn create(&self, new: NewFlightLog) -> Result<entity::flight_log::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let flight = entity::flight_log::ActiveModel {
            pilot_id: ActiveValue::Set(new.pilot_id),
            flight_date: ActiveValue::Set(new.flight_date),
            departure_airport: ActiveValue::Set(new.departure_airport),
            arrival_airport: ActiveValue::Set(new.arrival_airport),
            aircraft_tail_number: ActiveValue::Set(new.aircraft_tail_number),
            aircraft_type: ActiveValue::Set(new.aircraft_type),
            flight_duration: ActiveValue::Set(new.flight_duration),
            tracking_ref: ActiveValue::Set(new.tracking_ref),
            verification_status: ActiveValue::Set(VerificationStatus::Pending),
            verified_at: ActiveValue::Set(None),
            verified_by: ActiveValue::Set(None),
            notes: ActiveValue::Set(new.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        flight.insert(self.db).await
    }

    pub async fn get(&self, flight_id: i32) -> Result<Option<entity::flight_log::Model>, DbErr> {
        entity::prelude::FlightLog::find_by_id(flight_id)
            .one(self.db)
            .await
    }

    /// Lists a pilot's flights, most recent flight date first
    pub async fn list_by_pilot(
        &self,
        pilot_id: i32,
    ) -> Result<Vec<entity::flight_log::Model>, DbErr> {
        entity::prelude::FlightLog::find()
            .filter(entity::flight_log::Column::PilotId.eq(pilot_id))
            .order_by_desc(entity::flight_log::Column::FlightDate)
            .order_by_desc(entity::flight_log::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists pending flights for a set of pilots, oldest submission first
    pub async fn list_pending_by_pilots(
        &self,
        pilot_ids: &[i32],
    ) -> Result<Vec<entity::flight_log::Model>, DbErr> {
        entity::prelude::FlightLog::find()
            .filter(entity::flight_log::Column::PilotId.is_in(pilot_ids.iter().copied()))
            .filter(entity::flight_log::Column::VerificationStatus.eq(VerificationStatus::Pending))
            .order_by_asc(entity::flight_log::Column::CreatedAt)
            .order_by_asc(entity::flight_log::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a pending flight to a terminal state.
    ///
    /// The update is conditional on the row still being pending, so two CFIs
    /// racing to resolve the same flight cannot both win. Returns the number
    /// of rows updated: 0 means the flight was missing or already resolved.
    pub async fn resolve(
        &self,
        flight_id: i32,
        status: VerificationStatus,
        verified_by: i32,
    ) -> Result<u64, DbErr> {
        let now = Utc::now().naive_utc();
        let result = entity::prelude::FlightLog::update_many()
            .set(entity::flight_log::ActiveModel {
                verification_status: ActiveValue::Set(status),
                verified_at: ActiveValue::Set(Some(now)),
                verified_by: ActiveValue::Set(Some(verified_by)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::flight_log::Column::Id.eq(flight_id))
            .filter(entity::flight_log::Column::VerificationStatus.eq(VerificationStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
