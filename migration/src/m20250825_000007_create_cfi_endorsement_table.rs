use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250825_000001_create_user_table::Users,
    m20250825_000003_create_flight_log_table::FlightLogs,
};

static IDX_CFI_ENDORSEMENT_CFI_ID: &str = "idx_cfi_endorsement_cfi_id";
static IDX_CFI_ENDORSEMENT_PILOT_ID: &str = "idx_cfi_endorsement_pilot_id";
static FK_CFI_ENDORSEMENT_CFI_ID: &str = "fk_cfi_endorsement_cfi_id";
static FK_CFI_ENDORSEMENT_PILOT_ID: &str = "fk_cfi_endorsement_pilot_id";
static FK_CFI_ENDORSEMENT_FLIGHT_LOG_ID: &str = "fk_cfi_endorsement_flight_log_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CfiEndorsements::Table)
                    .if_not_exists()
                    .col(pk_auto(CfiEndorsements::Id))
                    .col(integer(CfiEndorsements::CfiId))
                    .col(integer(CfiEndorsements::PilotId))
                    .col(integer_null(CfiEndorsements::FlightLogId))
                    .col(string(CfiEndorsements::EndorsementType))
                    .col(text_null(CfiEndorsements::Notes))
                    .col(timestamp(CfiEndorsements::EndorsedAt))
                    .col(timestamp(CfiEndorsements::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CFI_ENDORSEMENT_CFI_ID)
                    .table(CfiEndorsements::Table)
                    .col(CfiEndorsements::CfiId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CFI_ENDORSEMENT_PILOT_ID)
                    .table(CfiEndorsements::Table)
                    .col(CfiEndorsements::PilotId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CFI_ENDORSEMENT_CFI_ID)
                    .from_tbl(CfiEndorsements::Table)
                    .from_col(CfiEndorsements::CfiId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CFI_ENDORSEMENT_PILOT_ID)
                    .from_tbl(CfiEndorsements::Table)
                    .from_col(CfiEndorsements::PilotId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CFI_ENDORSEMENT_FLIGHT_LOG_ID)
                    .from_tbl(CfiEndorsements::Table)
                    .from_col(CfiEndorsements::FlightLogId)
                    .to_tbl(FlightLogs::Table)
                    .to_col(FlightLogs::Id)
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
                    .name(FK_CFI_ENDORSEMENT_FLIGHT_LOG_ID)
                    .table(CfiEndorsements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CFI_ENDORSEMENT_PILOT_ID)
                    .table(CfiEndorsements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CFI_ENDORSEMENT_CFI_ID)
                    .table(CfiEndorsements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CFI_ENDORSEMENT_PILOT_ID)
                    .table(CfiEndorsements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CFI_ENDORSEMENT_CFI_ID)
                    .table(CfiEndorsements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CfiEndorsements::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CfiEndorsements {
    Table,
    Id,
    CfiId,
    PilotId,
    FlightLogId,
    EndorsementType,
    Notes,
    EndorsedAt,
    CreatedAt,
}
