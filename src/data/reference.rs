//! Repositories for the seeded rank and department reference tables.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::{department::Department, rank::Rank},
};

pub struct RankRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all ranks ordered by level.
    pub async fn get_all(&self) -> Result<Vec<Rank>, AppError> {
        let models = entity::prelude::Rank::find()
            .order_by_asc(entity::rank::Column::Level)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Rank::from_entity).collect())
    }

    pub async fn find_by_level(&self, level: i32) -> Result<Option<Rank>, AppError> {
        let model = entity::prelude::Rank::find_by_id(level).one(self.db).await?;
        Ok(model.map(Rank::from_entity))
    }

    /// Renames a rank. Returns the updated rank, or None if the level is unknown.
    pub async fn rename(&self, level: i32, title: String) -> Result<Option<Rank>, AppError> {
        let Some(model) = entity::prelude::Rank::find_by_id(level).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::rank::ActiveModel = model.into();
        active.title = ActiveValue::Set(title);
        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;

        Ok(Some(Rank::from_entity(model)))
    }
}

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all departments ordered by code.
    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        let models = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Code)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Department::from_entity).collect())
    }

    pub async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let model = entity::prelude::Department::find()
            .filter(entity::department::Column::Code.eq(code))
            .one(self.db)
            .await?;
        Ok(model.is_some())
    }
}
