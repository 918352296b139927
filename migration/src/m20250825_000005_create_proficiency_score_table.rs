use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250825_000001_create_user_table::Users;

static FK_PROFICIENCY_SCORE_PILOT_ID: &str = "fk_proficiency_score_pilot_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProficiencyScores::Table)
                    .if_not_exists()
                    .col(pk_auto(ProficiencyScores::Id))
                    .col(integer_uniq(ProficiencyScores::PilotId))
                    .col(integer(ProficiencyScores::OverallScore))
                    .col(integer(ProficiencyScores::SteepTurnsScore))
                    .col(integer(ProficiencyScores::SlowFlightScore))
                    .col(integer(ProficiencyScores::StallRecoveryScore))
                    .col(integer(ProficiencyScores::TrafficPatternScore))
                    .col(string_len(ProficiencyScores::DiscountTier, 32))
                    .col(integer(ProficiencyScores::DiscountPercentage))
                    .col(timestamp_null(ProficiencyScores::LastCheckDate))
                    .col(timestamp_null(ProficiencyScores::NextCheckDue))
                    .col(integer(ProficiencyScores::TotalFlightsVerified))
                    .col(integer(ProficiencyScores::TotalManeuversCompleted))
                    .col(timestamp(ProficiencyScores::CreatedAt))
                    .col(timestamp(ProficiencyScores::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFICIENCY_SCORE_PILOT_ID)
                    .from_tbl(ProficiencyScores::Table)
                    .from_col(ProficiencyScores::PilotId)
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
                    .name(FK_PROFICIENCY_SCORE_PILOT_ID)
                    .table(ProficiencyScores::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProficiencyScores::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProficiencyScores {
    Table,
    Id,
    PilotId,
    OverallScore,
    SteepTurnsScore,
    SlowFlightScore,
    StallRecoveryScore,
    TrafficPatternScore,
    DiscountTier,
    DiscountPercentage,
    LastCheckDate,
    NextCheckDue,
    TotalFlightsVerified,
    TotalManeuversCompleted,
    CreatedAt,
    UpdatedAt,
}
