use std::path::{Path, PathBuf};

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context containing the database connection for an isolated test.
///
/// Provides an in-memory SQLite database connection for unit and integration testing.
/// The database is created lazily on first access and persists for the lifetime of the
/// test context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// SQLite file backing the database, when several pooled connections must see the
    /// same data. Removed again when the context is dropped.
    file: Option<PathBuf>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            file: None,
        }
    }

    /// Creates a context backed by a fresh SQLite file in the system temp directory.
    ///
    /// # Arguments
    /// - `name` - Distinguishes the file from other tests running in the same process
    pub fn on_disk(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "holonet-test-{}-{}.db",
            std::process::id(),
            name
        ));
        remove_database_files(&path);

        Self {
            db: None,
            file: Some(path),
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::DbErr)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let url = match &self.file {
                    Some(path) => format!("sqlite://{}?mode=rwc", path.display()),
                    None => "sqlite::memory:".to_string(),
                };
                let db = Database::connect(url).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Runs all application migrations against the test database.
    ///
    /// # Returns
    /// - `Ok(())` - Schema created
    /// - `Err(TestError::DbErr)` - A migration failed
    pub async fn migrate(&mut self) -> Result<(), TestError> {
        let db = self.database().await?;

        Migrator::up(db, None).await?;

        Ok(())
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each CREATE TABLE statement in sequence. Typically called internally by
    /// `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(path) = &self.file {
            remove_database_files(path);
        }
    }
}

fn remove_database_files(path: &Path) {
    for suffix in ["", "-journal", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
