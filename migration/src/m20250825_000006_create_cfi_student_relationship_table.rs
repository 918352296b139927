use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250825_000001_create_user_table::Users;

static IDX_CFI_STUDENT_RELATIONSHIP_CFI_ID: &str = "idx_cfi_student_relationship_cfi_id";
static IDX_CFI_STUDENT_RELATIONSHIP_STUDENT_ID: &str = "idx_cfi_student_relationship_student_id";
static FK_CFI_STUDENT_RELATIONSHIP_CFI_ID: &str = "fk_cfi_student_relationship_cfi_id";
static FK_CFI_STUDENT_RELATIONSHIP_STUDENT_ID: &str = "fk_cfi_student_relationship_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CfiStudentRelationships::Table)
                    .if_not_exists()
                    .col(pk_auto(CfiStudentRelationships::Id))
                    .col(integer(CfiStudentRelationships::CfiId))
                    .col(integer(CfiStudentRelationships::StudentId))
                    .col(string(CfiStudentRelationships::Status))
                    .col(timestamp(CfiStudentRelationships::StartDate))
                    .col(timestamp_null(CfiStudentRelationships::EndDate))
                    .col(timestamp(CfiStudentRelationships::CreatedAt))
                    .col(timestamp(CfiStudentRelationships::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CFI_STUDENT_RELATIONSHIP_CFI_ID)
                    .table(CfiStudentRelationships::Table)
                    .col(CfiStudentRelationships::CfiId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CFI_STUDENT_RELATIONSHIP_STUDENT_ID)
                    .table(CfiStudentRelationships::Table)
                    .col(CfiStudentRelationships::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CFI_STUDENT_RELATIONSHIP_CFI_ID)
                    .from_tbl(CfiStudentRelationships::Table)
                    .from_col(CfiStudentRelationships::CfiId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CFI_STUDENT_RELATIONSHIP_STUDENT_ID)
                    .from_tbl(CfiStudentRelationships::Table)
                    .from_col(CfiStudentRelationships::StudentId)
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
                    .name(FK_CFI_STUDENT_RELATIONSHIP_STUDENT_ID)
                    .table(CfiStudentRelationships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CFI_STUDENT_RELATIONSHIP_CFI_ID)
                    .table(CfiStudentRelationships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CFI_STUDENT_RELATIONSHIP_STUDENT_ID)
                    .table(CfiStudentRelationships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CFI_STUDENT_RELATIONSHIP_CFI_ID)
                    .table(CfiStudentRelationships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CfiStudentRelationships::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CfiStudentRelationships {
    Table,
    Id,
    CfiId,
    StudentId,
    Status,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}
