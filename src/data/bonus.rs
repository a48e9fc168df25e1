//! Bonus payment and work-log repositories.
//!
//! Payments are tagged with the Monday of the week they accrued in; the
//! weekly rollover marks past weeks submitted. Work-log counters are
//! maintained by the same accrual triggers.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::bonus::{BonusKind, BonusPayment, WorkLog},
};

pub struct BonusPaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BonusPaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an accrued payment into the given week window.
    pub async fn create(
        &self,
        employee_id: i32,
        kind: BonusKind,
        amount: i64,
        week_start: NaiveDate,
    ) -> Result<BonusPayment, AppError> {
        let model = entity::prelude::BonusPayment::insert(entity::bonus_payment::ActiveModel {
            employee_id: ActiveValue::Set(employee_id),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            amount: ActiveValue::Set(amount),
            week_start: ActiveValue::Set(week_start),
            submitted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        BonusPayment::from_entity(model)
    }

    /// Gets payments newest-first, optionally filtered by week and employee.
    pub async fn get_paginated(
        &self,
        week_start: Option<NaiveDate>,
        employee_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<BonusPayment>, u64), AppError> {
        let mut query = entity::prelude::BonusPayment::find()
            .order_by_desc(entity::bonus_payment::Column::CreatedAt);

        if let Some(week_start) = week_start {
            query = query.filter(entity::bonus_payment::Column::WeekStart.eq(week_start));
        }
        if let Some(employee_id) = employee_id {
            query = query.filter(entity::bonus_payment::Column::EmployeeId.eq(employee_id));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let payments = models
            .into_iter()
            .map(BonusPayment::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((payments, total))
    }

    /// Sums an employee's unsubmitted payments for one week.
    pub async fn week_total(
        &self,
        employee_id: i32,
        week_start: NaiveDate,
    ) -> Result<i64, AppError> {
        let models = entity::prelude::BonusPayment::find()
            .filter(entity::bonus_payment::Column::EmployeeId.eq(employee_id))
            .filter(entity::bonus_payment::Column::WeekStart.eq(week_start))
            .all(self.db)
            .await?;

        Ok(models.iter().map(|m| m.amount).sum())
    }

    /// Marks every unsubmitted payment of any week before `week` as submitted.
    ///
    /// Catching up all earlier weeks makes the rollover idempotent and
    /// tolerant of missed cron runs. Returns the number of rows closed.
    pub async fn close_weeks_before(&self, week: NaiveDate) -> Result<u64, AppError> {
        let result = entity::prelude::BonusPayment::update_many()
            .filter(entity::bonus_payment::Column::WeekStart.lt(week))
            .filter(entity::bonus_payment::Column::Submitted.eq(false))
            .col_expr(
                entity::bonus_payment::Column::Submitted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

pub struct WorkLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bumps the counter matching the bonus kind on the (employee, week) row,
    /// creating the row on first accrual. Adjustments have no counter.
    pub async fn bump(
        &self,
        employee_id: i32,
        week_start: NaiveDate,
        kind: BonusKind,
    ) -> Result<(), AppError> {
        let existing = entity::prelude::WorkLog::find()
            .filter(entity::work_log::Column::EmployeeId.eq(employee_id))
            .filter(entity::work_log::Column::WeekStart.eq(week_start))
            .one(self.db)
            .await?;

        match existing {
            Some(model) => {
                let mut active: entity::work_log::ActiveModel = model.clone().into();
                match kind {
                    BonusKind::CaseOpened => {
                        active.cases_opened = ActiveValue::Set(model.cases_opened + 1);
                    }
                    BonusKind::CaseClosed => {
                        active.cases_closed = ActiveValue::Set(model.cases_closed + 1);
                    }
                    BonusKind::SanctionIssued => {
                        active.sanctions_issued = ActiveValue::Set(model.sanctions_issued + 1);
                    }
                    BonusKind::TrainingConducted => {
                        active.trainings_held = ActiveValue::Set(model.trainings_held + 1);
                    }
                    BonusKind::Adjustment => return Ok(()),
                }
                sea_orm::ActiveModelTrait::update(active, self.db).await?;
            }
            None => {
                let (cases_opened, cases_closed, sanctions_issued, trainings_held) = match kind {
                    BonusKind::CaseOpened => (1, 0, 0, 0),
                    BonusKind::CaseClosed => (0, 1, 0, 0),
                    BonusKind::SanctionIssued => (0, 0, 1, 0),
                    BonusKind::TrainingConducted => (0, 0, 0, 1),
                    BonusKind::Adjustment => return Ok(()),
                };
                entity::prelude::WorkLog::insert(entity::work_log::ActiveModel {
                    employee_id: ActiveValue::Set(employee_id),
                    week_start: ActiveValue::Set(week_start),
                    cases_opened: ActiveValue::Set(cases_opened),
                    cases_closed: ActiveValue::Set(cases_closed),
                    sanctions_issued: ActiveValue::Set(sanctions_issued),
                    trainings_held: ActiveValue::Set(trainings_held),
                    ..Default::default()
                })
                .exec(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Gets every employee's work log for one week.
    pub async fn get_for_week(&self, week_start: NaiveDate) -> Result<Vec<WorkLog>, AppError> {
        let models = entity::prelude::WorkLog::find()
            .filter(entity::work_log::Column::WeekStart.eq(week_start))
            .order_by_asc(entity::work_log::Column::EmployeeId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(WorkLog::from_entity).collect())
    }

    /// Gets one employee's work log for one week.
    pub async fn get_for_employee_week(
        &self,
        employee_id: i32,
        week_start: NaiveDate,
    ) -> Result<Option<WorkLog>, AppError> {
        let model = entity::prelude::WorkLog::find()
            .filter(entity::work_log::Column::EmployeeId.eq(employee_id))
            .filter(entity::work_log::Column::WeekStart.eq(week_start))
            .one(self.db)
            .await?;

        Ok(model.map(WorkLog::from_entity))
    }
}
