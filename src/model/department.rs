use crate::dto::reference::DepartmentDto;

/// A department from the seeded reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub code: String,
    pub name: String,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            code: entity.code,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            code: self.code,
            name: self.name,
        }
    }
}
