//! Investigation and evidence domain models.

use chrono::{DateTime, Utc};

use crate::{
    dto::investigation::{EvidenceDto, InvestigationDto},
    error::AppError,
    util::parse::parse_u64_from_string,
};

/// Lifecycle state of an investigation case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Open,
    Closed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Internal-affairs investigation case.
#[derive(Debug, Clone, PartialEq)]
pub struct Investigation {
    pub id: i32,
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    /// Discord ID of the investigating lead.
    pub lead_user_id: u64,
    pub subject_employee_id: Option<i32>,
    pub status: CaseStatus,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Investigation {
    pub fn from_entity(entity: entity::investigation::Model) -> Result<Self, AppError> {
        let lead_user_id = parse_u64_from_string(entity.lead_user_id)?;
        let status = CaseStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown case status '{}' for investigation {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            case_number: entity.case_number,
            title: entity.title,
            description: entity.description,
            lead_user_id,
            subject_employee_id: entity.subject_employee_id,
            status,
            opened_at: entity.opened_at,
            closed_at: entity.closed_at,
        })
    }

    pub fn into_dto(self) -> InvestigationDto {
        InvestigationDto {
            id: self.id,
            case_number: self.case_number,
            title: self.title,
            description: self.description,
            lead_user_id: self.lead_user_id,
            subject_employee_id: self.subject_employee_id,
            status: self.status.as_str().to_string(),
            opened_at: self.opened_at,
            closed_at: self.closed_at,
        }
    }
}

/// Evidence item attached to an investigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub id: i32,
    pub investigation_id: i32,
    pub label: String,
    pub description: Option<String>,
    pub storage_ref: Option<String>,
    pub added_by: u64,
    pub added_at: DateTime<Utc>,
}

impl Evidence {
    pub fn from_entity(entity: entity::evidence::Model) -> Result<Self, AppError> {
        let added_by = parse_u64_from_string(entity.added_by)?;

        Ok(Self {
            id: entity.id,
            investigation_id: entity.investigation_id,
            label: entity.label,
            description: entity.description,
            storage_ref: entity.storage_ref,
            added_by,
            added_at: entity.added_at,
        })
    }

    pub fn into_dto(self) -> EvidenceDto {
        EvidenceDto {
            id: self.id,
            investigation_id: self.investigation_id,
            label: self.label,
            description: self.description,
            storage_ref: self.storage_ref,
            added_by: self.added_by,
            added_at: self.added_at,
        }
    }
}

/// Parameters for opening a new investigation.
#[derive(Debug, Clone)]
pub struct OpenInvestigationParam {
    pub title: String,
    pub description: Option<String>,
    pub lead_user_id: u64,
    pub subject_employee_id: Option<i32>,
}

/// Parameters for amending an open investigation.
#[derive(Debug, Clone, Default)]
pub struct UpdateInvestigationParam {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub subject_employee_id: Option<Option<i32>>,
}

/// Parameters for attaching evidence to an investigation.
#[derive(Debug, Clone)]
pub struct AddEvidenceParam {
    pub investigation_id: i32,
    pub label: String,
    pub description: Option<String>,
    pub storage_ref: Option<String>,
    pub added_by: u64,
}
