//! Investigation factory for creating test investigation entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct InvestigationFactory<'a> {
    db: &'a DatabaseConnection,
    case_number: String,
    title: String,
    lead_user_id: String,
    status: String,
}

impl<'a> InvestigationFactory<'a> {
    /// Defaults: an open case with a unique case number and generated lead.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            case_number: format!("IA-TEST-{}", id),
            title: format!("Case {}", id),
            lead_user_id: id.to_string(),
            status: "open".to_string(),
        }
    }

    pub fn lead_user_id(mut self, lead_user_id: impl Into<String>) -> Self {
        self.lead_user_id = lead_user_id.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::investigation::Model, DbErr> {
        entity::investigation::ActiveModel {
            case_number: ActiveValue::Set(self.case_number),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            lead_user_id: ActiveValue::Set(self.lead_user_id),
            subject_employee_id: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            opened_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open investigation with default values.
pub async fn create_investigation(
    db: &DatabaseConnection,
) -> Result<entity::investigation::Model, DbErr> {
    InvestigationFactory::new(db).build().await
}
