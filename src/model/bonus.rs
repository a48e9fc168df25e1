//! Bonus payment and work-log domain models.
//!
//! Payments accrue inside a Monday-based week window and are closed by the
//! weekly rollover job. The amount for each business event is fixed here.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dto::bonus::{BonusPaymentDto, WorkLogDto};
use crate::error::AppError;

/// Business event that accrues a bonus payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusKind {
    CaseOpened,
    CaseClosed,
    SanctionIssued,
    TrainingConducted,
    /// Manual leadership adjustment; the amount is supplied by the caller.
    Adjustment,
}

impl BonusKind {
    /// Fixed payout for this event kind, in treasury credits.
    ///
    /// Adjustments have no fixed amount; callers supply their own.
    pub fn amount(&self) -> i64 {
        match self {
            Self::CaseOpened => 500,
            Self::CaseClosed => 1500,
            Self::SanctionIssued => 250,
            Self::TrainingConducted => 1000,
            Self::Adjustment => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseOpened => "case_opened",
            Self::CaseClosed => "case_closed",
            Self::SanctionIssued => "sanction_issued",
            Self::TrainingConducted => "training_conducted",
            Self::Adjustment => "adjustment",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "case_opened" => Some(Self::CaseOpened),
            "case_closed" => Some(Self::CaseClosed),
            "sanction_issued" => Some(Self::SanctionIssued),
            "training_conducted" => Some(Self::TrainingConducted),
            "adjustment" => Some(Self::Adjustment),
            _ => None,
        }
    }
}

/// Bonus payment accrued to an employee for one business event.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusPayment {
    pub id: i32,
    pub employee_id: i32,
    pub kind: BonusKind,
    pub amount: i64,
    pub week_start: NaiveDate,
    pub submitted: bool,
    pub created_at: DateTime<Utc>,
}

impl BonusPayment {
    pub fn from_entity(entity: entity::bonus_payment::Model) -> Result<Self, AppError> {
        let kind = BonusKind::parse(&entity.kind).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown bonus kind '{}' for payment {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            employee_id: entity.employee_id,
            kind,
            amount: entity.amount,
            week_start: entity.week_start,
            submitted: entity.submitted,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> BonusPaymentDto {
        BonusPaymentDto {
            id: self.id,
            employee_id: self.employee_id,
            kind: self.kind.as_str().to_string(),
            amount: self.amount,
            week_start: self.week_start,
            submitted: self.submitted,
            created_at: self.created_at,
        }
    }
}

/// Weekly activity counters for one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkLog {
    pub employee_id: i32,
    pub week_start: NaiveDate,
    pub cases_opened: i32,
    pub cases_closed: i32,
    pub sanctions_issued: i32,
    pub trainings_held: i32,
}

impl WorkLog {
    pub fn from_entity(entity: entity::work_log::Model) -> Self {
        Self {
            employee_id: entity.employee_id,
            week_start: entity.week_start,
            cases_opened: entity.cases_opened,
            cases_closed: entity.cases_closed,
            sanctions_issued: entity.sanctions_issued,
            trainings_held: entity.trainings_held,
        }
    }

    pub fn into_dto(self) -> WorkLogDto {
        WorkLogDto {
            employee_id: self.employee_id,
            week_start: self.week_start,
            cases_opened: self.cases_opened,
            cases_closed: self.cases_closed,
            sanctions_issued: self.sanctions_issued,
            trainings_held: self.trainings_held,
        }
    }
}
