use sea_orm::entity::prelude::*;

/// Ledger entry on a treasury account. Deposits carry a positive amount,
/// withdrawals a negative one; `kind` is `deposit` or `withdrawal`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "treasury_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    pub amount: i64,
    pub kind: String,
    pub memo: Option<String>,
    pub actor_user_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
