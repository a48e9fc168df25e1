//! Announcement data repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::{
    error::AppError,
    model::announcement::{Announcement, CreateAnnouncementParam, UpdateAnnouncementParam},
};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new announcement.
    pub async fn create(
        &self,
        param: CreateAnnouncementParam,
    ) -> Result<Announcement, AppError> {
        let now = Utc::now();
        let model = entity::prelude::Announcement::insert(entity::announcement::ActiveModel {
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            author_user_id: ActiveValue::Set(param.author_user_id.to_string()),
            pinned: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Announcement::from_entity(model)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, AppError> {
        let model = entity::prelude::Announcement::find_by_id(id).one(self.db).await?;
        model.map(Announcement::from_entity).transpose()
    }

    /// Gets announcements pinned-first, then newest-first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Announcement>, u64), AppError> {
        let paginator = entity::prelude::Announcement::find()
            .order_by_desc(entity::announcement::Column::Pinned)
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let announcements = models
            .into_iter()
            .map(Announcement::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((announcements, total))
    }

    /// Edits an announcement. Returns None if unknown.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAnnouncementParam,
    ) -> Result<Option<Announcement>, AppError> {
        let Some(model) = entity::prelude::Announcement::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::announcement::ActiveModel = model.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(body) = param.body {
            active.body = ActiveValue::Set(body);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        Ok(Some(Announcement::from_entity(model)?))
    }

    /// Pins or unpins an announcement. Returns None if unknown.
    pub async fn set_pinned(
        &self,
        id: i32,
        pinned: bool,
    ) -> Result<Option<Announcement>, AppError> {
        let Some(model) = entity::prelude::Announcement::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::announcement::ActiveModel = model.into();
        active.pinned = ActiveValue::Set(pinned);
        active.updated_at = ActiveValue::Set(Utc::now());

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        Ok(Some(Announcement::from_entity(model)?))
    }

    /// Deletes an announcement. Returns whether a record was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Announcement::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
