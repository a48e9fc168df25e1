//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// Creates only the employee row; tests that need the backing user row or
/// department memberships insert those explicitly.
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    badge_number: Option<String>,
    name: String,
    rank_level: i32,
    status: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults: a unique user_id, `Officer {id}` as name, rank level 2,
    /// active status, no badge number.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            badge_number: None,
            name: format!("Officer {}", id),
            rank_level: 2,
            status: "active".to_string(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn badge_number(mut self, badge_number: impl Into<String>) -> Self {
        self.badge_number = Some(badge_number.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rank_level(mut self, rank_level: i32) -> Self {
        self.rank_level = rank_level;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now();
        entity::employee::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            badge_number: ActiveValue::Set(self.badge_number),
            name: ActiveValue::Set(self.name),
            rank_level: ActiveValue::Set(self.rank_level),
            status: ActiveValue::Set(self.status),
            hired_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active employee with default values.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_employee_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Employee)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let employee = create_employee(db).await?;

        assert!(!employee.user_id.is_empty());
        assert_eq!(employee.status, "active");
        assert_eq!(employee.rank_level, 2);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_employees() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Employee)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let a = create_employee(db).await?;
        let b = create_employee(db).await?;

        assert_ne!(a.user_id, b.user_id);

        Ok(())
    }
}
