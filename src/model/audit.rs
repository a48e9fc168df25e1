use chrono::{DateTime, Utc};

use crate::{dto::audit::AuditEntryDto, error::AppError, util::parse::parse_u64_from_string};

/// One row of the append-only audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: i32,
    pub actor_user_id: u64,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<String>,
    pub detail: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn from_entity(entity: entity::audit_log::Model) -> Result<Self, AppError> {
        let actor_user_id = parse_u64_from_string(entity.actor_user_id)?;
        let detail = match entity.detail {
            Some(raw) => Some(serde_json::from_str(&raw).map_err(|e| {
                AppError::InternalError(format!(
                    "Malformed audit detail for entry {}: {}",
                    entity.id, e
                ))
            })?),
            None => None,
        };

        Ok(Self {
            id: entity.id,
            actor_user_id,
            action: entity.action,
            entity: entity.entity,
            entity_id: entity.entity_id,
            detail,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AuditEntryDto {
        AuditEntryDto {
            id: self.id,
            actor_user_id: self.actor_user_id,
            action: self.action,
            entity: self.entity,
            entity_id: self.entity_id,
            detail: self.detail,
            created_at: self.created_at,
        }
    }
}
