use sea_orm::entity::prelude::*;

/// Per-employee weekly activity counters, bumped by the same triggers that
/// accrue bonus payments. One row per (employee, week).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "work_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub week_start: Date,
    pub cases_opened: i32,
    pub cases_closed: i32,
    pub sanctions_issued: i32,
    pub trainings_held: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
