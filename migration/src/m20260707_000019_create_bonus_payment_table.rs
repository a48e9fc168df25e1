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
                    .table(BonusPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(BonusPayment::Id))
                    .col(integer(BonusPayment::EmployeeId))
                    .col(string(BonusPayment::Kind))
                    .col(big_integer(BonusPayment::Amount))
                    .col(date(BonusPayment::WeekStart))
                    .col(boolean(BonusPayment::Submitted).default(false))
                    .col(
                        timestamp_with_time_zone(BonusPayment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bonus_payment_employee_id")
                            .from(BonusPayment::Table, BonusPayment::EmployeeId)
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
                    .name("idx_bonus_payment_week_start")
                    .table(BonusPayment::Table)
                    .col(BonusPayment::WeekStart)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BonusPayment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BonusPayment {
    Table,
    Id,
    EmployeeId,
    Kind,
    Amount,
    WeekStart,
    Submitted,
    CreatedAt,
}
