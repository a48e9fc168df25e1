use sea_orm_migration::{prelude::*, schema::*};

use super::m20260703_000010_create_investigation_table::Investigation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Evidence::Table)
                    .if_not_exists()
                    .col(pk_auto(Evidence::Id))
                    .col(integer(Evidence::InvestigationId))
                    .col(string(Evidence::Label))
                    .col(text_null(Evidence::Description))
                    .col(string_null(Evidence::StorageRef))
                    .col(string(Evidence::AddedBy))
                    .col(
                        timestamp_with_time_zone(Evidence::AddedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evidence_investigation_id")
                            .from(Evidence::Table, Evidence::InvestigationId)
                            .to(Investigation::Table, Investigation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Evidence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Evidence {
    Table,
    Id,
    InvestigationId,
    Label,
    Description,
    StorageRef,
    AddedBy,
    AddedAt,
}
