//! Audit log repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::{error::AppError, model::audit::AuditEntry};

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the audit trail.
    ///
    /// Audit failures are surfaced to the caller; mutating handlers treat the
    /// audit write as part of the operation.
    pub async fn record(
        &self,
        actor_user_id: u64,
        action: &str,
        entity_name: &str,
        entity_id: Option<String>,
        detail: Option<serde_json::Value>,
    ) -> Result<(), AppError> {
        let detail = detail.map(|d| d.to_string());

        entity::prelude::AuditLog::insert(entity::audit_log::ActiveModel {
            actor_user_id: ActiveValue::Set(actor_user_id.to_string()),
            action: ActiveValue::Set(action.to_string()),
            entity: ActiveValue::Set(entity_name.to_string()),
            entity_id: ActiveValue::Set(entity_id),
            detail: ActiveValue::Set(detail),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Gets audit entries newest-first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AuditEntry>, u64), AppError> {
        let paginator = entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let entries = models
            .into_iter()
            .map(AuditEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total))
    }
}
