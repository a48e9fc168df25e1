use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_user_table::User,
    m20260702_000007_create_employee_table::Employee,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Investigation::Table)
                    .if_not_exists()
                    .col(pk_auto(Investigation::Id))
                    .col(string_uniq(Investigation::CaseNumber))
                    .col(string(Investigation::Title))
                    .col(text_null(Investigation::Description))
                    .col(string(Investigation::LeadUserId))
                    .col(integer_null(Investigation::SubjectEmployeeId))
                    .col(string(Investigation::Status).default("open"))
                    .col(
                        timestamp_with_time_zone(Investigation::OpenedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Investigation::ClosedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investigation_lead_user_id")
                            .from(Investigation::Table, Investigation::LeadUserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investigation_subject_employee_id")
                            .from(Investigation::Table, Investigation::SubjectEmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Investigation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Investigation {
    Table,
    Id,
    CaseNumber,
    Title,
    Description,
    LeadUserId,
    SubjectEmployeeId,
    Status,
    OpenedAt,
    ClosedAt,
}
