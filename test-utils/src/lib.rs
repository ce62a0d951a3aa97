//! Quotebook Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the quotebook
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases migrated to the production schema.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for seeding rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_quote_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_migrations()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
