//! Training data repository.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::training::{CreateTrainingParam, Training, TrainingAttendee, UpdateTrainingParam},
};

pub struct TrainingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a conducted training session.
    pub async fn create(&self, param: CreateTrainingParam) -> Result<Training, AppError> {
        let model = entity::prelude::Training::insert(entity::training::ActiveModel {
            title: ActiveValue::Set(param.title),
            instructor_user_id: ActiveValue::Set(param.instructor_user_id.to_string()),
            conducted_at: ActiveValue::Set(param.conducted_at),
            location: ActiveValue::Set(param.location),
            notes: ActiveValue::Set(param.notes),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Training::from_entity(model)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Training>, AppError> {
        let model = entity::prelude::Training::find_by_id(id).one(self.db).await?;
        model.map(Training::from_entity).transpose()
    }

    /// Gets trainings newest-first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Training>, u64), AppError> {
        let paginator = entity::prelude::Training::find()
            .order_by_desc(entity::training::Column::ConductedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let trainings = models
            .into_iter()
            .map(Training::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((trainings, total))
    }

    /// Amends a training record. Returns None if unknown.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateTrainingParam,
    ) -> Result<Option<Training>, AppError> {
        let Some(model) = entity::prelude::Training::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::training::ActiveModel = model.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(notes) = param.notes {
            active.notes = ActiveValue::Set(notes);
        }

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        Ok(Some(Training::from_entity(model)?))
    }

    /// Deletes a training. Attendance rows cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Training::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Replaces the attendance list of a training.
    pub async fn set_attendance(
        &self,
        training_id: i32,
        attendees: &[TrainingAttendee],
    ) -> Result<(), AppError> {
        entity::prelude::TrainingAttendance::delete_many()
            .filter(entity::training_attendance::Column::TrainingId.eq(training_id))
            .exec(self.db)
            .await?;

        if attendees.is_empty() {
            return Ok(());
        }

        let rows: Vec<entity::training_attendance::ActiveModel> = attendees
            .iter()
            .map(|a| entity::training_attendance::ActiveModel {
                training_id: ActiveValue::Set(training_id),
                employee_id: ActiveValue::Set(a.employee_id),
                passed: ActiveValue::Set(a.passed),
            })
            .collect();

        entity::prelude::TrainingAttendance::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the attendance list of a training.
    pub async fn get_attendance(
        &self,
        training_id: i32,
    ) -> Result<Vec<TrainingAttendee>, AppError> {
        let rows = entity::prelude::TrainingAttendance::find()
            .filter(entity::training_attendance::Column::TrainingId.eq(training_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(TrainingAttendee::from_entity).collect())
    }
}
