use sea_orm_migration::{prelude::*, schema::*};

use super::m20260702_000007_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkLog::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkLog::Id))
                    .col(integer(WorkLog::EmployeeId))
                    .col(date(WorkLog::WeekStart))
                    .col(integer(WorkLog::CasesOpened).default(0))
                    .col(integer(WorkLog::CasesClosed).default(0))
                    .col(integer(WorkLog::SanctionsIssued).default(0))
                    .col(integer(WorkLog::TrainingsHeld).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_log_employee_id")
                            .from(WorkLog::Table, WorkLog::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_work_log_employee_week")
                    .table(WorkLog::Table)
                    .col(WorkLog::EmployeeId)
                    .col(WorkLog::WeekStart)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkLog {
    Table,
    Id,
    EmployeeId,
    WeekStart,
    CasesOpened,
    CasesClosed,
    SanctionsIssued,
    TrainingsHeld,
}
