use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordRole::Table)
                    .if_not_exists()
                    .col(string(DiscordRole::RoleId).primary_key())
                    .col(string(DiscordRole::GuildId))
                    .col(string(DiscordRole::Name))
                    .col(integer(DiscordRole::Position).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordRole {
    Table,
    RoleId,
    GuildId,
    Name,
    Position,
}
