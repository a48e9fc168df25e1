use sea_orm::entity::prelude::*;

/// Application user authenticated through Discord OAuth.
///
/// Discord IDs are stored as strings since SQLite has no unsigned 64-bit
/// integer type; the domain layer parses them back to u64 at the boundary.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    pub name: String,
    pub admin: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
