use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TreasuryAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(TreasuryAccount::Id))
                    .col(string(TreasuryAccount::Name))
                    .col(
                        timestamp_with_time_zone(TreasuryAccount::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Every department starts with a single shared fund.
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(TreasuryAccount::Table)
                    .columns([TreasuryAccount::Name])
                    .values_panic(["General Fund".into()])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TreasuryAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TreasuryAccount {
    Table,
    Id,
    Name,
    CreatedAt,
}
