use sea_orm::entity::prelude::*;

/// Attendance of an employee at a training session.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "training_attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub training_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: i32,
    pub passed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
