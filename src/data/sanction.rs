//! Sanction data repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::sanction::{CreateSanctionParam, Sanction, UpdateSanctionParam},
};

pub struct SanctionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SanctionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new sanction.
    pub async fn create(&self, param: CreateSanctionParam) -> Result<Sanction, AppError> {
        let model = entity::prelude::Sanction::insert(entity::sanction::ActiveModel {
            employee_id: ActiveValue::Set(param.employee_id),
            issued_by: ActiveValue::Set(param.issued_by.to_string()),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            reason: ActiveValue::Set(param.reason),
            issued_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(param.expires_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Sanction::from_entity(model)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Sanction>, AppError> {
        let model = entity::prelude::Sanction::find_by_id(id).one(self.db).await?;
        model.map(Sanction::from_entity).transpose()
    }

    /// Gets sanctions newest-first, optionally filtered to one employee.
    pub async fn get_paginated(
        &self,
        employee_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Sanction>, u64), AppError> {
        let mut query = entity::prelude::Sanction::find()
            .order_by_desc(entity::sanction::Column::IssuedAt);

        if let Some(employee_id) = employee_id {
            query = query.filter(entity::sanction::Column::EmployeeId.eq(employee_id));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let sanctions = models
            .into_iter()
            .map(Sanction::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((sanctions, total))
    }

    /// Amends a sanction's reason or expiry. Returns None if no record matches.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateSanctionParam,
    ) -> Result<Option<Sanction>, AppError> {
        let Some(model) = entity::prelude::Sanction::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::sanction::ActiveModel = model.into();
        if let Some(reason) = param.reason {
            active.reason = ActiveValue::Set(reason);
        }
        if let Some(expires_at) = param.expires_at {
            active.expires_at = ActiveValue::Set(expires_at);
        }

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        Ok(Some(Sanction::from_entity(model)?))
    }

    /// Deletes a sanction. Returns whether a record was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Sanction::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
