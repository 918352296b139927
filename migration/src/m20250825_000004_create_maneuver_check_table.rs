use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250825_000001_create_user_table::Users,
    m20250825_000003_create_flight_log_table::FlightLogs,
};

static IDX_MANEUVER_CHECK_FLIGHT_LOG_ID: &str = "idx_maneuver_check_flight_log_id";
static IDX_MANEUVER_CHECK_PILOT_ID: &str = "idx_maneuver_check_pilot_id";
static FK_MANEUVER_CHECK_FLIGHT_LOG_ID: &str = "fk_maneuver_check_flight_log_id";
static FK_MANEUVER_CHECK_PILOT_ID: &str = "fk_maneuver_check_pilot_id";
static FK_MANEUVER_CHECK_REVIEWED_BY: &str = "fk_maneuver_check_reviewed_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ManeuverChecks::Table)
                    .if_not_exists()
                    .col(pk_auto(ManeuverChecks::Id))
                    .col(integer(ManeuverChecks::FlightLogId))
                    .col(integer(ManeuverChecks::PilotId))
                    .col(string_len(ManeuverChecks::ManeuverType, 32))
                    .col(string_len(ManeuverChecks::Status, 32))
                    .col(integer_null(ManeuverChecks::Score))
                    .col(float_null(ManeuverChecks::BankAngle))
                    .col(float_null(ManeuverChecks::AltitudeDeviation))
                    .col(float_null(ManeuverChecks::SpeedDeviation))
                    .col(float_null(ManeuverChecks::HeadingDeviation))
                    .col(timestamp_null(ManeuverChecks::DetectedAt))
                    .col(float_null(ManeuverChecks::Latitude))
                    .col(float_null(ManeuverChecks::Longitude))
                    .col(integer_null(ManeuverChecks::ReviewedBy))
                    .col(timestamp_null(ManeuverChecks::ReviewedAt))
                    .col(text_null(ManeuverChecks::ReviewNotes))
                    .col(timestamp(ManeuverChecks::CreatedAt))
                    .col(timestamp(ManeuverChecks::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MANEUVER_CHECK_FLIGHT_LOG_ID)
                    .table(ManeuverChecks::Table)
                    .col(ManeuverChecks::FlightLogId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MANEUVER_CHECK_PILOT_ID)
                    .table(ManeuverChecks::Table)
                    .col(ManeuverChecks::PilotId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MANEUVER_CHECK_FLIGHT_LOG_ID)
                    .from_tbl(ManeuverChecks::Table)
                    .from_col(ManeuverChecks::FlightLogId)
                    .to_tbl(FlightLogs::Table)
                    .to_col(FlightLogs::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MANEUVER_CHECK_PILOT_ID)
                    .from_tbl(ManeuverChecks::Table)
                    .from_col(ManeuverChecks::PilotId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MANEUVER_CHECK_REVIEWED_BY)
                    .from_tbl(ManeuverChecks::Table)
                    .from_col(ManeuverChecks::ReviewedBy)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MANEUVER_CHECK_REVIEWED_BY)
                    .table(ManeuverChecks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MANEUVER_CHECK_PILOT_ID)
                    .table(ManeuverChecks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MANEUVER_CHECK_FLIGHT_LOG_ID)
                    .table(ManeuverChecks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MANEUVER_CHECK_PILOT_ID)
                    .table(ManeuverChecks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MANEUVER_CHECK_FLIGHT_LOG_ID)
                    .table(ManeuverChecks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ManeuverChecks::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ManeuverChecks {
    Table,
    Id,
    FlightLogId,
    PilotId,
    ManeuverType,
    Status,
    Score,
    BankAngle,
    AltitudeDeviation,
    SpeedDeviation,
    HeadingDeviation,
    DetectedAt,
    Latitude,
    Longitude,
    ReviewedBy,
    ReviewedAt,
    ReviewNotes,
    CreatedAt,
    UpdatedAt,
}
