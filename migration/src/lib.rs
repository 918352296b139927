pub use sea_orm_migration::prelude::*;

mod m20250825_000001_create_user_table;
mod m20250825_000002_create_pilot_profile_table;
mod m20250825_000003_create_flight_log_table;
mod m20250825_000004_create_maneuver_check_table;
mod m20250825_000005_create_proficiency_score_table;
mod m20250825_000006_create_cfi_student_relationship_table;
mod m20250825_000007_create_cfi_endorsement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250825_000001_create_user_table::Migration),
            Box::new(m20250825_000002_create_pilot_profile_table::Migration),
            Box::new(m20250825_000003_create_flight_log_table::Migration),
            Box::new(m20250825_000004_create_maneuver_check_table::Migration),
            Box::new(m20250825_000005_create_proficiency_score_table::Migration),
            Box::new(m20250825_000006_create_cfi_student_relationship_table::Migration),
            Box::new(m20250825_000007_create_cfi_endorsement_table::Migration),
        ]
    }
}
