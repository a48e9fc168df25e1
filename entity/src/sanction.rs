use sea_orm::entity::prelude::*;

/// Disciplinary sanction against an employee.
///
/// `kind` is one of `warning`, `reprimand`, `suspension`, `dismissal`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sanction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub issued_by: String,
    pub kind: String,
    pub reason: String,
    pub issued_at: DateTimeUtc,
    pub expires_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
