//! Investigation and evidence data repositories.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::investigation::{
        AddEvidenceParam, CaseStatus, Evidence, Investigation, OpenInvestigationParam,
        UpdateInvestigationParam,
    },
};

pub struct InvestigationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvestigationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new investigation under the given case number.
    pub async fn create(
        &self,
        case_number: String,
        param: OpenInvestigationParam,
    ) -> Result<Investigation, AppError> {
        let model = entity::prelude::Investigation::insert(entity::investigation::ActiveModel {
            case_number: ActiveValue::Set(case_number),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            lead_user_id: ActiveValue::Set(param.lead_user_id.to_string()),
            subject_employee_id: ActiveValue::Set(param.subject_employee_id),
            status: ActiveValue::Set(CaseStatus::Open.as_str().to_string()),
            opened_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Investigation::from_entity(model)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Investigation>, AppError> {
        let model = entity::prelude::Investigation::find_by_id(id).one(self.db).await?;
        model.map(Investigation::from_entity).transpose()
    }

    /// Gets investigations newest-first, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        status: Option<CaseStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Investigation>, u64), AppError> {
        let mut query = entity::prelude::Investigation::find()
            .order_by_desc(entity::investigation::Column::OpenedAt);

        if let Some(status) = status {
            query = query.filter(entity::investigation::Column::Status.eq(status.as_str()));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let investigations = models
            .into_iter()
            .map(Investigation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((investigations, total))
    }

    /// Amends an investigation's descriptive fields. Returns None if unknown.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateInvestigationParam,
    ) -> Result<Option<Investigation>, AppError> {
        let Some(model) = entity::prelude::Investigation::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::investigation::ActiveModel = model.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(subject_employee_id) = param.subject_employee_id {
            active.subject_employee_id = ActiveValue::Set(subject_employee_id);
        }

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        Ok(Some(Investigation::from_entity(model)?))
    }

    /// Transitions an investigation to closed and stamps the closing time.
    ///
    /// The caller is responsible for verifying the case is currently open.
    pub async fn close(&self, id: i32) -> Result<Option<Investigation>, AppError> {
        let Some(model) = entity::prelude::Investigation::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::investigation::ActiveModel = model.into();
        active.status = ActiveValue::Set(CaseStatus::Closed.as_str().to_string());
        active.closed_at = ActiveValue::Set(Some(Utc::now()));

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        Ok(Some(Investigation::from_entity(model)?))
    }
}

pub struct EvidenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EvidenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches an evidence item to an investigation.
    pub async fn create(&self, param: AddEvidenceParam) -> Result<Evidence, AppError> {
        let model = entity::prelude::Evidence::insert(entity::evidence::ActiveModel {
            investigation_id: ActiveValue::Set(param.investigation_id),
            label: ActiveValue::Set(param.label),
            description: ActiveValue::Set(param.description),
            storage_ref: ActiveValue::Set(param.storage_ref),
            added_by: ActiveValue::Set(param.added_by.to_string()),
            added_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Evidence::from_entity(model)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Evidence>, AppError> {
        let model = entity::prelude::Evidence::find_by_id(id).one(self.db).await?;
        model.map(Evidence::from_entity).transpose()
    }

    /// Gets all evidence for an investigation, oldest first.
    pub async fn get_by_investigation(
        &self,
        investigation_id: i32,
    ) -> Result<Vec<Evidence>, AppError> {
        let models = entity::prelude::Evidence::find()
            .filter(entity::evidence::Column::InvestigationId.eq(investigation_id))
            .order_by_asc(entity::evidence::Column::AddedAt)
            .all(self.db)
            .await?;

        models.into_iter().map(Evidence::from_entity).collect()
    }

    /// Deletes an evidence item. Returns whether a record was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Evidence::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
