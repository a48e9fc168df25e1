//! Bonus accrual triggers and the weekly rollover.
//!
//! Domain routers call `record` on business events (case opened/closed,
//! sanction issued, training conducted). Each accrual inserts a payment
//! tagged with the Monday of the current week and bumps the matching
//! work-log counter. The weekly cron closes finished weeks.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        bonus::{BonusPaymentRepository, WorkLogRepository},
        employee::EmployeeRepository,
    },
    error::AppError,
    model::{
        bonus::{BonusKind, BonusPayment},
        employee::EmployeeStatus,
    },
};

/// The Monday starting the bonus week containing `at`.
pub fn week_start_of(at: DateTime<Utc>) -> NaiveDate {
    let date = at.date_naive();
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub struct AccrualService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccrualService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Accrues the fixed payout for a business event.
    ///
    /// No-op (returns None) when the employee doesn't exist or is not active,
    /// so dismissed employees can't accumulate payments.
    pub async fn record(
        &self,
        employee_id: i32,
        kind: BonusKind,
    ) -> Result<Option<BonusPayment>, AppError> {
        self.record_with_amount(employee_id, kind, kind.amount()).await
    }

    /// Accrues a manual leadership adjustment with a caller-supplied amount.
    pub async fn record_adjustment(
        &self,
        employee_id: i32,
        amount: i64,
    ) -> Result<Option<BonusPayment>, AppError> {
        self.record_with_amount(employee_id, BonusKind::Adjustment, amount)
            .await
    }

    async fn record_with_amount(
        &self,
        employee_id: i32,
        kind: BonusKind,
        amount: i64,
    ) -> Result<Option<BonusPayment>, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);

        let Some(employee) = employee_repo.find_by_id(employee_id).await? else {
            return Ok(None);
        };
        if employee.status != EmployeeStatus::Active {
            tracing::debug!(
                "Skipping {} accrual for non-active employee {}",
                kind.as_str(),
                employee_id
            );
            return Ok(None);
        }

        let week_start = week_start_of(Utc::now());

        let payment = BonusPaymentRepository::new(self.db)
            .create(employee_id, kind, amount, week_start)
            .await?;

        WorkLogRepository::new(self.db)
            .bump(employee_id, week_start, kind)
            .await?;

        Ok(Some(payment))
    }

    /// Closes every bonus week before the current one.
    ///
    /// Called by the weekly cron shortly after the week boundary. Idempotent:
    /// already-submitted payments are untouched, and missed runs are caught
    /// up on the next invocation. Returns the number of payments closed.
    pub async fn close_previous_weeks(&self) -> Result<u64, AppError> {
        let current_week = week_start_of(Utc::now());
        BonusPaymentRepository::new(self.db)
            .close_weeks_before(current_week)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn week_start_is_monday_for_midweek_instant() {
        // Wednesday 2026-07-08.
        let at = Utc.with_ymd_and_hms(2026, 7, 8, 15, 30, 0).unwrap();
        assert_eq!(
            week_start_of(at),
            NaiveDate::from_ymd_opt(2026, 7, 6).unwrap()
        );
    }

    #[test]
    fn week_start_of_monday_is_itself() {
        let at = Utc.with_ymd_and_hms(2026, 7, 6, 0, 0, 0).unwrap();
        assert_eq!(
            week_start_of(at),
            NaiveDate::from_ymd_opt(2026, 7, 6).unwrap()
        );
    }

    #[test]
    fn sunday_belongs_to_the_preceding_monday() {
        let at = Utc.with_ymd_and_hms(2026, 7, 12, 23, 59, 59).unwrap();
        assert_eq!(
            week_start_of(at),
            NaiveDate::from_ymd_opt(2026, 7, 6).unwrap()
        );
    }

    #[test]
    fn fixed_amounts_match_the_payout_table() {
        assert_eq!(BonusKind::CaseOpened.amount(), 500);
        assert_eq!(BonusKind::CaseClosed.amount(), 1500);
        assert_eq!(BonusKind::SanctionIssued.amount(), 250);
        assert_eq!(BonusKind::TrainingConducted.amount(), 1000);
    }
}
