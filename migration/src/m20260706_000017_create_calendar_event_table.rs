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
                    .table(CalendarEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(CalendarEvent::Id))
                    .col(string(CalendarEvent::Title))
                    .col(text_null(CalendarEvent::Description))
                    .col(timestamp_with_time_zone(CalendarEvent::StartsAt))
                    .col(timestamp_with_time_zone(CalendarEvent::EndsAt))
                    .col(string(CalendarEvent::Recurrence).default("none"))
                    .col(string(CalendarEvent::CreatedBy))
                    .col(
                        timestamp_with_time_zone(CalendarEvent::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_created_by")
                            .from(CalendarEvent::Table, CalendarEvent::CreatedBy)
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
            .drop_table(Table::drop().table(CalendarEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CalendarEvent {
    Table,
    Id,
    Title,
    Description,
    StartsAt,
    EndsAt,
    Recurrence,
    CreatedBy,
    CreatedAt,
}
