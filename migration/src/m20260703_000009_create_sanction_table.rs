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
                    .table(Sanction::Table)
                    .if_not_exists()
                    .col(pk_auto(Sanction::Id))
                    .col(integer(Sanction::EmployeeId))
                    .col(string(Sanction::IssuedBy))
                    .col(string(Sanction::Kind))
                    .col(text(Sanction::Reason))
                    .col(
                        timestamp_with_time_zone(Sanction::IssuedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Sanction::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sanction_employee_id")
                            .from(Sanction::Table, Sanction::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sanction_issued_by")
                            .from(Sanction::Table, Sanction::IssuedBy)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sanction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sanction {
    Table,
    Id,
    EmployeeId,
    IssuedBy,
    Kind,
    Reason,
    IssuedAt,
    ExpiresAt,
}
