use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const DEPARTMENTS: [(&str, &str); 7] = [
    ("patrol", "Patrol Division"),
    ("detectives", "Detective Bureau"),
    ("ia", "Internal Affairs"),
    ("swat", "Special Weapons and Tactics"),
    ("traffic", "Traffic Enforcement"),
    ("academy", "Police Academy"),
    ("hr", "Human Resources"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(string(Department::Code).primary_key())
                    .col(string(Department::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(Department::Table)
            .columns([Department::Code, Department::Name])
            .to_owned();
        for (code, name) in DEPARTMENTS {
            insert.values_panic([code.into(), name.into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Department {
    Table,
    Code,
    Name,
}
