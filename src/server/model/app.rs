use sea_orm::DatabaseConnection;

use crate::server::config::TierSchedule;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tiers: TierSchedule,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            tiers: TierSchedule::default(),
        }
    }
}
