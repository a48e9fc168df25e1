use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260702_000007_create_employee_table::Employee,
    m20260704_000012_create_training_table::Training,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingAttendance::Table)
                    .if_not_exists()
                    .col(integer(TrainingAttendance::TrainingId))
                    .col(integer(TrainingAttendance::EmployeeId))
                    .col(boolean(TrainingAttendance::Passed).default(true))
                    .primary_key(
                        Index::create()
                            .col(TrainingAttendance::TrainingId)
                            .col(TrainingAttendance::EmployeeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_attendance_training_id")
                            .from(TrainingAttendance::Table, TrainingAttendance::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_attendance_employee_id")
                            .from(TrainingAttendance::Table, TrainingAttendance::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingAttendance {
    Table,
    TrainingId,
    EmployeeId,
    Passed,
}
