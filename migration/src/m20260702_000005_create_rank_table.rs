use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const RANKS: [(i32, &str); 17] = [
    (1, "Cadet"),
    (2, "Officer I"),
    (3, "Officer II"),
    (4, "Officer III"),
    (5, "Senior Officer"),
    (6, "Corporal"),
    (7, "Sergeant I"),
    (8, "Sergeant II"),
    (9, "Staff Sergeant"),
    (10, "Lieutenant"),
    (11, "Captain"),
    (12, "Major"),
    (13, "Deputy Commander"),
    (14, "Commander"),
    (15, "Deputy Chief"),
    (16, "Assistant Chief"),
    (17, "Chief of Police"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rank::Table)
                    .if_not_exists()
                    .col(integer(Rank::Level).primary_key())
                    .col(string(Rank::Title))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(Rank::Table)
            .columns([Rank::Level, Rank::Title])
            .to_owned();
        for (level, title) in RANKS {
            insert.values_panic([level.into(), title.into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rank {
    Table,
    Level,
    Title,
}
