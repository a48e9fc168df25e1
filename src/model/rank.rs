use crate::dto::reference::RankDto;

/// A rank from the seeded reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct Rank {
    pub level: i32,
    pub title: String,
}

impl Rank {
    pub fn from_entity(entity: entity::rank::Model) -> Self {
        Self {
            level: entity.level,
            title: entity.title,
        }
    }

    pub fn into_dto(self) -> RankDto {
        RankDto {
            level: self.level,
            title: self.title,
        }
    }
}
