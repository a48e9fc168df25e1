use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Training::Table)
                    .if_not_exists()
                    .col(pk_auto(Training::Id))
                    .col(string(Training::Title))
                    .col(string(Training::InstructorUserId))
                    .col(timestamp_with_time_zone(Training::ConductedAt))
                    .col(string_null(Training::Location))
                    .col(text_null(Training::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_instructor_user_id")
                            .from(Training::Table, Training::InstructorUserId)
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
            .drop_table(Table::drop().table(Training::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Training {
    Table,
    Id,
    Title,
    InstructorUserId,
    ConductedAt,
    Location,
    Notes,
}
