use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Employee, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Employee)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing employee records: User, Rank, Department,
    /// Employee, and EmployeeDepartment.
    pub fn with_employee_tables(self) -> Self {
        self.with_table(entity::prelude::User)
            .with_table(entity::prelude::Rank)
            .with_table(entity::prelude::Department)
            .with_table(entity::prelude::Employee)
            .with_table(entity::prelude::EmployeeDepartment)
    }

    /// Adds the tables backing permission resolution: DiscordRole, UserRole,
    /// and RolePermission.
    pub fn with_permission_tables(self) -> Self {
        self.with_table(entity::prelude::DiscordRole)
            .with_table(entity::prelude::UserRole)
            .with_table(entity::prelude::RolePermission)
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates every table
    /// added to the builder, in insertion order.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.database().await?;
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
