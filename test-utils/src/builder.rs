use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Either add individual entity tables with `with_table()`, or apply the
/// application's real migrations with `with_migrations()` when the test depends on
/// foreign keys and unique indexes.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, People};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(People)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether to run the migrator before creating any extra tables.
    migrations: bool,

    /// Name of the on-disk database file, `None` for in-memory.
    file: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrations: false,
            file: None,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys should be added after their referenced tables). Composite unique indexes
    /// are only created by `with_migrations()`.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Applies every application migration to the test database.
    ///
    /// Creates the user, item and favorite tables with their foreign keys and
    /// `(user, item)` unique indexes, exactly as production does.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Backs the database with a temporary SQLite file instead of memory.
    ///
    /// An in-memory database lives on a single connection, so tests that race several
    /// pooled connections against each other need a file. The name must be unique
    /// among tests in the same run.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn on_disk(mut self, name: &str) -> Self {
        self.file = Some(name.to_string());
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection, runs migrations if requested
    /// and then executes all CREATE TABLE statements added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::DbErr)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match &self.file {
            Some(name) => TestContext::on_disk(name),
            None => TestContext::new(),
        };

        if self.migrations {
            setup.migrate().await?;
        }

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
