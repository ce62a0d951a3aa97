//! Quote factory for creating test quote entities.
//!
//! This module provides factory methods for creating quote rows with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test quotes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::quote::QuoteFactory;
///
/// let quote = QuoteFactory::new(&db)
///     .author("Twain")
///     .text("The secret of getting ahead is getting started.")
///     .build()
///     .await?;
/// ```
pub struct QuoteFactory<'a> {
    db: &'a DatabaseConnection,
    author: String,
    text: String,
    created_at: Option<DateTime<Utc>>,
}

impl<'a> QuoteFactory<'a> {
    /// Creates a new QuoteFactory with default values.
    ///
    /// Defaults:
    /// - author: `"Author {id}"` where id is auto-incremented
    /// - text: `"Quote text {id}"`
    /// - created_at: left to the database default
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            author: format!("Author {}", id),
            text: format!("Quote text {}", id),
            created_at: None,
        }
    }

    /// Sets the author of the quote.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the text of the quote.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Overrides the creation timestamp instead of using the database default.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds and inserts the quote entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::quote::Model)` - Created quote entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::quote::Model, DbErr> {
        entity::quote::ActiveModel {
            author: ActiveValue::Set(self.author),
            text: ActiveValue::Set(self.text),
            created_at: match self.created_at {
                Some(created_at) => ActiveValue::Set(created_at),
                None => ActiveValue::NotSet,
            },
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a quote with default values.
///
/// Shorthand for `QuoteFactory::new(db).build().await`.
pub async fn create_quote(db: &DatabaseConnection) -> Result<entity::quote::Model, DbErr> {
    QuoteFactory::new(db).build().await
}

/// Creates a quote with the given author and default text.
pub async fn create_quote_by(
    db: &DatabaseConnection,
    author: &str,
) -> Result<entity::quote::Model, DbErr> {
    QuoteFactory::new(db).author(author).build().await
}
