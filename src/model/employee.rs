//! Employee domain models and parameters.
//!
//! Employee records are created by the roster synchronizer, never over HTTP;
//! the API can only mutate badge numbers and status.

use chrono::{DateTime, Utc};

use crate::{dto::employee::EmployeeDto, error::AppError, util::parse::parse_u64_from_string};

/// Employment status of a department member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Suspended,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "suspended" => Some(Self::Suspended),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Employee with rank, status, and department memberships.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    /// Discord ID of the member backing this record.
    pub user_id: u64,
    pub badge_number: Option<String>,
    pub name: String,
    /// Rank level 1-17 parsed from the member's Discord roles.
    pub rank_level: i32,
    pub status: EmployeeStatus,
    /// Department codes, unioned over the member's roles.
    pub departments: Vec<String>,
    pub hired_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Converts an entity model plus its department codes into a domain model.
    pub fn from_entity(
        entity: entity::employee::Model,
        departments: Vec<String>,
    ) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let status = EmployeeStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown employee status '{}' for employee {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id,
            badge_number: entity.badge_number,
            name: entity.name,
            rank_level: entity.rank_level,
            status,
            departments,
            hired_at: entity.hired_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            user_id: self.user_id,
            badge_number: self.badge_number,
            name: self.name,
            rank_level: self.rank_level,
            status: self.status.as_str().to_string(),
            departments: self.departments,
            hired_at: self.hired_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters produced by the roster synchronizer for one guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterUpsertParam {
    pub user_id: u64,
    pub name: String,
    pub rank_level: i32,
    pub departments: Vec<String>,
}

/// Parameters for updating an employee over the API.
///
/// Fields set to None are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployeeParam {
    pub badge_number: Option<String>,
    pub status: Option<EmployeeStatus>,
}

/// Filter and pagination for employee listings.
#[derive(Debug, Clone)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of employees with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedEmployees {
    pub employees: Vec<Employee>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
