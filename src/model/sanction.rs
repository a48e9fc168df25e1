//! Sanction domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{dto::sanction::SanctionDto, error::AppError, util::parse::parse_u64_from_string};

/// Severity class of a disciplinary sanction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanctionKind {
    Warning,
    Reprimand,
    Suspension,
    Dismissal,
}

impl SanctionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Reprimand => "reprimand",
            Self::Suspension => "suspension",
            Self::Dismissal => "dismissal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "warning" => Some(Self::Warning),
            "reprimand" => Some(Self::Reprimand),
            "suspension" => Some(Self::Suspension),
            "dismissal" => Some(Self::Dismissal),
            _ => None,
        }
    }
}

/// Disciplinary sanction against an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanction {
    pub id: i32,
    pub employee_id: i32,
    /// Discord ID of the issuing officer.
    pub issued_by: u64,
    pub kind: SanctionKind,
    pub reason: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Sanction {
    pub fn from_entity(entity: entity::sanction::Model) -> Result<Self, AppError> {
        let issued_by = parse_u64_from_string(entity.issued_by)?;
        let kind = SanctionKind::parse(&entity.kind).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown sanction kind '{}' for sanction {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            employee_id: entity.employee_id,
            issued_by,
            kind,
            reason: entity.reason,
            issued_at: entity.issued_at,
            expires_at: entity.expires_at,
        })
    }

    pub fn into_dto(self) -> SanctionDto {
        SanctionDto {
            id: self.id,
            employee_id: self.employee_id,
            issued_by: self.issued_by,
            kind: self.kind.as_str().to_string(),
            reason: self.reason,
            issued_at: self.issued_at,
            expires_at: self.expires_at,
        }
    }
}

/// Parameters for issuing a new sanction.
#[derive(Debug, Clone)]
pub struct CreateSanctionParam {
    pub employee_id: i32,
    pub issued_by: u64,
    pub kind: SanctionKind,
    pub reason: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Parameters for amending an existing sanction. None leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSanctionParam {
    pub reason: Option<String>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
}
