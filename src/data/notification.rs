//! Notification data repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{error::AppError, model::notification::Notification};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unread notification for a user.
    pub async fn create(
        &self,
        user_id: u64,
        title: String,
        body: String,
    ) -> Result<Notification, AppError> {
        let model = entity::prelude::Notification::insert(entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            title: ActiveValue::Set(title),
            body: ActiveValue::Set(body),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Notification::from_entity(model)
    }

    /// Gets a user's notifications newest-first.
    pub async fn get_for_user(
        &self,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), AppError> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let notifications = models
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notifications, total))
    }

    /// Marks one of the user's notifications read.
    ///
    /// The user filter prevents marking another user's notification. Returns
    /// whether a row was updated.
    pub async fn mark_read(&self, id: i32, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id.to_string()))
            .col_expr(
                entity::notification::Column::Read,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks all of the user's notifications read. Returns the number updated.
    pub async fn mark_all_read(&self, user_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id.to_string()))
            .filter(entity::notification::Column::Read.eq(false))
            .col_expr(
                entity::notification::Column::Read,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
