use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Column values for a new endorsement.
pub struct NewEndorsement {
    pub cfi_id: i32,
    pub pilot_id: i32,
    pub flight_log_id: Option<i32>,
    pub endorsement_type: String,
    pub notes: Option<String>,
}

pub struct EndorsementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EndorsementRepository<'a> {
    /// Creates a new instance of [`EndorsementRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues an endorsement stamped with the current time.
    ///
    /// Endorsements are append-only; there is no update or delete counterpart.
    pub async fn create(
        &self,
        new: NewEndorsement,
    ) -> Result<entity::cfi_endorsement::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let endorsement = entity::cfi_endorsement::ActiveModel {
            cfi_id: ActiveValue::Set(new.cfi_id),
            pilot_id: ActiveValue::Set(new.pilot_id),
            flight_log_id: ActiveValue::Set(new.flight_log_id),
            endorsement_type: ActiveValue::Set(new.endorsement_type),
            notes: ActiveValue::Set(new.notes),
            endorsed_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        endorsement.insert(self.db).await
    }

    /// Lists endorsements a CFI has issued, most recent first
    pub async fn list_by_cfi(
        &self,
        cfi_id: i32,
    ) -> Result<Vec<entity::cfi_endorsement::Model>, DbErr> {
        entity::prelude::CfiEndorsement::find()
            .filter(entity::cfi_endorsement::Column::CfiId.eq(cfi_id))
            .order_by_desc(entity::cfi_endorsement::Column::EndorsedAt)
            .order_by_desc(entity::cfi_endorsement::Column::Id)
            .all(self.db)
            .await
    }
}
