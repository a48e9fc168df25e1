//! Calendar event data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::calendar::{CalendarEvent, CreateEventParam, Recurrence, UpdateEventParam},
};

pub struct CalendarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateEventParam) -> Result<CalendarEvent, AppError> {
        let model = entity::prelude::CalendarEvent::insert(
            entity::calendar_event::ActiveModel {
                title: ActiveValue::Set(param.title),
                description: ActiveValue::Set(param.description),
                starts_at: ActiveValue::Set(param.starts_at),
                ends_at: ActiveValue::Set(param.ends_at),
                recurrence: ActiveValue::Set(param.recurrence.as_str().to_string()),
                created_by: ActiveValue::Set(param.created_by.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .exec_with_returning(self.db)
        .await?;

        CalendarEvent::from_entity(model)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CalendarEvent>, AppError> {
        let model = entity::prelude::CalendarEvent::find_by_id(id).one(self.db).await?;
        model.map(CalendarEvent::from_entity).transpose()
    }

    /// Gets all events ordered by start time.
    pub async fn get_all(&self) -> Result<Vec<CalendarEvent>, AppError> {
        let models = entity::prelude::CalendarEvent::find()
            .order_by_asc(entity::calendar_event::Column::StartsAt)
            .all(self.db)
            .await?;

        models.into_iter().map(CalendarEvent::from_entity).collect()
    }

    /// Gets events that may produce occurrences inside `[from, to)`:
    /// recurring events that started before the window's end, plus one-shot
    /// events overlapping the window.
    pub async fn get_candidates(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, AppError> {
        let models = entity::prelude::CalendarEvent::find()
            .filter(entity::calendar_event::Column::StartsAt.lt(to))
            .filter(
                Condition::any()
                    .add(
                        entity::calendar_event::Column::Recurrence
                            .ne(Recurrence::None.as_str()),
                    )
                    .add(entity::calendar_event::Column::EndsAt.gt(from)),
            )
            .order_by_asc(entity::calendar_event::Column::StartsAt)
            .all(self.db)
            .await?;

        models.into_iter().map(CalendarEvent::from_entity).collect()
    }

    /// Edits an event. Returns None if unknown.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateEventParam,
    ) -> Result<Option<CalendarEvent>, AppError> {
        let Some(model) = entity::prelude::CalendarEvent::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::calendar_event::ActiveModel = model.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(starts_at) = param.starts_at {
            active.starts_at = ActiveValue::Set(starts_at);
        }
        if let Some(ends_at) = param.ends_at {
            active.ends_at = ActiveValue::Set(ends_at);
        }
        if let Some(recurrence) = param.recurrence {
            active.recurrence = ActiveValue::Set(recurrence.as_str().to_string());
        }

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        Ok(Some(CalendarEvent::from_entity(model)?))
    }

    /// Deletes an event. Returns whether a record was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::CalendarEvent::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
