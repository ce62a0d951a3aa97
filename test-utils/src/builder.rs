use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Apply the production schema with `with_migrations()`, then call `build()` to
/// create the configured test context. A builder without migrations yields an empty
/// database, useful for exercising storage failures.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_migrations()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Whether to run `migration::Migrator` against the database during `build()`.
    migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with migrations disabled.
    ///
    /// # Returns
    /// - New `TestBuilder` instance producing an empty database
    pub fn new() -> Self {
        Self { migrations: false }
    }

    /// Applies the production migrations to the test database.
    ///
    /// Tests then run against the schema exactly as the server creates it at startup,
    /// including backend-specific column defaults.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection and runs the migrations if requested.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database ready
    /// - `Err(TestError::Database)`- Failed to connect to database or run migrations
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.database().await?;

        if self.migrations {
            setup.with_migrations().await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
