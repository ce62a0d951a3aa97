//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let quote = factory::quote::create_quote(&db).await?;
//!
//!     // Several quotes by the same author
//!     let quotes = factory::helpers::create_quotes_by(&db, "Twain", 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `quote` - Create quote entities
//! - `helpers` - Counters and bulk seeding helpers

pub mod helpers;
pub mod quote;

pub use helpers::create_quotes_by;
pub use quote::{create_quote, create_quote_by};
