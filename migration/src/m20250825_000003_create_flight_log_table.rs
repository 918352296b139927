use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250825_000001_create_user_table::Users;

static IDX_FLIGHT_LOG_PILOT_ID: &str = "idx_flight_log_pilot_id";
static IDX_FLIGHT_LOG_VERIFICATION_STATUS: &str = "idx_flight_log_verification_status";
static FK_FLIGHT_LOG_PILOT_ID: &str = "fk_flight_log_pilot_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightLogs::Id))
                    .col(integer(FlightLogs::PilotId))
                    .col(date(FlightLogs::FlightDate))
                    .col(string(FlightLogs::DepartureAirport))
                    .col(string(FlightLogs::ArrivalAirport))
                    .col(string(FlightLogs::AircraftTailNumber))
                    .col(string(FlightLogs::AircraftType))
                    .col(float_null(FlightLogs::FlightDuration))
                    .col(string_null(FlightLogs::TrackingRef))
                    .col(string_len(FlightLogs::VerificationStatus, 32))
                    .col(timestamp_null(FlightLogs::VerifiedAt))
                    .col(integer_null(FlightLogs::VerifiedBy))
                    .col(text_null(FlightLogs::Notes))
                    .col(timestamp(FlightLogs::CreatedAt))
                    .col(timestamp(FlightLogs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_LOG_PILOT_ID)
                    .table(FlightLogs::Table)
                    .col(FlightLogs::PilotId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_LOG_VERIFICATION_STATUS)
                    .table(FlightLogs::Table)
                    .col(FlightLogs::VerificationStatus)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FLIGHT_LOG_PILOT_ID)
                    .from_tbl(FlightLogs::Table)
                    .from_col(FlightLogs::PilotId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FLIGHT_LOG_PILOT_ID)
                    .table(FlightLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_LOG_VERIFICATION_STATUS)
                    .table(FlightLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_LOG_PILOT_ID)
                    .table(FlightLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FlightLogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FlightLogs {
    Table,
    Id,
    PilotId,
    FlightDate,
    DepartureAirport,
    ArrivalAirport,
    AircraftTailNumber,
    AircraftType,
    FlightDuration,
    TrackingRef,
    VerificationStatus,
    VerifiedAt,
    VerifiedBy,
    Notes,
    CreatedAt,
    UpdatedAt,
}
