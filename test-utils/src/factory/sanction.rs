//! Sanction factory for creating test sanction entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SanctionFactory<'a> {
    db: &'a DatabaseConnection,
    employee_id: i32,
    issued_by: String,
    kind: String,
    reason: String,
}

impl<'a> SanctionFactory<'a> {
    /// Defaults: a warning with a generated issuer and reason. The employee
    /// id must be supplied.
    pub fn new(db: &'a DatabaseConnection, employee_id: i32) -> Self {
        Self {
            db,
            employee_id,
            issued_by: next_id().to_string(),
            kind: "warning".to_string(),
            reason: "Conduct unbecoming".to_string(),
        }
    }

    pub fn issued_by(mut self, issued_by: impl Into<String>) -> Self {
        self.issued_by = issued_by.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub async fn build(self) -> Result<entity::sanction::Model, DbErr> {
        entity::sanction::ActiveModel {
            employee_id: ActiveValue::Set(self.employee_id),
            issued_by: ActiveValue::Set(self.issued_by),
            kind: ActiveValue::Set(self.kind),
            reason: ActiveValue::Set(self.reason),
            issued_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a warning sanction against the given employee.
pub async fn create_sanction(
    db: &DatabaseConnection,
    employee_id: i32,
) -> Result<entity::sanction::Model, DbErr> {
    SanctionFactory::new(db, employee_id).build().await
}
