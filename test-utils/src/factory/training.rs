//! Training factory for creating test training entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TrainingFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    instructor_user_id: String,
}

impl<'a> TrainingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Training {}", id),
            instructor_user_id: id.to_string(),
        }
    }

    pub fn instructor_user_id(mut self, instructor_user_id: impl Into<String>) -> Self {
        self.instructor_user_id = instructor_user_id.into();
        self
    }

    pub async fn build(self) -> Result<entity::training::Model, DbErr> {
        entity::training::ActiveModel {
            title: ActiveValue::Set(self.title),
            instructor_user_id: ActiveValue::Set(self.instructor_user_id),
            conducted_at: ActiveValue::Set(Utc::now()),
            location: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a training with default values.
pub async fn create_training(db: &DatabaseConnection) -> Result<entity::training::Model, DbErr> {
    TrainingFactory::new(db).build().await
}
