use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_user_table::User,
    m20260705_000014_create_treasury_account_table::TreasuryAccount,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TreasuryTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(TreasuryTransaction::Id))
                    .col(integer(TreasuryTransaction::AccountId))
                    .col(big_integer(TreasuryTransaction::Amount))
                    .col(string(TreasuryTransaction::Kind))
                    .col(string_null(TreasuryTransaction::Memo))
                    .col(string(TreasuryTransaction::ActorUserId))
                    .col(
                        timestamp_with_time_zone(TreasuryTransaction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_treasury_transaction_account_id")
                            .from(
                                TreasuryTransaction::Table,
                                TreasuryTransaction::AccountId,
                            )
                            .to(TreasuryAccount::Table, TreasuryAccount::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_treasury_transaction_actor_user_id")
                            .from(
                                TreasuryTransaction::Table,
                                TreasuryTransaction::ActorUserId,
                            )
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
            .drop_table(Table::drop().table(TreasuryTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TreasuryTransaction {
    Table,
    Id,
    AccountId,
    Amount,
    Kind,
    Memo,
    ActorUserId,
    CreatedAt,
}
