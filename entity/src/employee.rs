use sea_orm::entity::prelude::*;

/// Employee record, created and reconciled by the guild roster synchronizer.
///
/// `status` is one of `active`, `suspended`, `inactive`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    pub badge_number: Option<String>,
    pub name: String,
    pub rank_level: i32,
    pub status: String,
    pub hired_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
