use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// Test context containing the database connection for an isolated test environment.
///
/// Provides an in-memory SQLite database connection for unit and integration testing.
/// The database is created lazily on first access and persists for the lifetime of the
/// test context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// creates a new in-memory SQLite database and stores the connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Runs all pending production migrations against the test database.
    ///
    /// # Returns
    /// - `Ok(())` - Schema is up to date
    /// - `Err(TestError::Database)` - A migration failed
    pub async fn with_migrations(&mut self) -> Result<(), TestError> {
        let db = self.database().await?;

        Migrator::up(db, None).await?;

        Ok(())
    }

    /// Returns a cloned handle to the database pool.
    ///
    /// Useful when the code under test needs an owned connection, such as application
    /// state shared with a spawned server. The clone shares the same in-memory database.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Owned handle to the same pool
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn db_handle(&mut self) -> Result<DatabaseConnection, TestError> {
        Ok(self.database().await?.clone())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
