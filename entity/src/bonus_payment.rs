use sea_orm::entity::prelude::*;

/// Bonus payment accrued to an employee inside a Monday-based week window.
///
/// `kind` names the business event that triggered the accrual. Rows are
/// marked `submitted` when the weekly rollover closes their week.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bonus_payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub kind: String,
    pub amount: i64,
    pub week_start: Date,
    pub submitted: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
