use sea_orm::entity::prelude::*;

/// Internal-affairs investigation case. `status` is `open` or `closed`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "investigation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub lead_user_id: String,
    pub subject_employee_id: Option<i32>,
    pub status: String,
    pub opened_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
