//! Quote data repository for database operations
//!
//! Provides the `QuoteRepository` capability and its SeaORM-backed implementation,
//! `DbQuoteRepository`. Storage driver failures are wrapped into `AppError::StorageErr`
//! with the attempted operation as context; `AppError::NotFound` is only produced by
//! `random_one` and `delete_by_id`. Listing operations report "no rows" as an empty
//! vector.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    middleware::request_context::RequestContext,
    model::quote::{CreateQuoteParams, Quote},
};

/// Storage capability for quotes.
///
/// Every operation receives the request context of the caller. Dropping the returned
/// future (for example when the client disconnects) abandons the in-flight query.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Inserts a quote and returns the storage-generated id.
    async fn create(&self, ctx: &RequestContext, params: CreateQuoteParams)
        -> Result<i32, AppError>;

    /// Returns every stored quote ordered by id.
    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Quote>, AppError>;

    /// Returns the quotes whose author exactly matches `author`, ordered by id.
    async fn list_by_author(
        &self,
        ctx: &RequestContext,
        author: &str,
    ) -> Result<Vec<Quote>, AppError>;

    /// Returns one quote chosen uniformly at random.
    ///
    /// Fails with `AppError::NotFound` when no quotes are stored.
    async fn random_one(&self, ctx: &RequestContext) -> Result<Quote, AppError>;

    /// Deletes the quote with the given id.
    ///
    /// Fails with `AppError::NotFound` when no row matches.
    async fn delete_by_id(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError>;
}

/// Repository providing quote persistence through a SeaORM connection pool.
///
/// Holds a clone of the process-wide pool handle; clones share the same pool.
#[derive(Clone)]
pub struct DbQuoteRepository {
    db: DatabaseConnection,
}

impl DbQuoteRepository {
    /// Creates a new DbQuoteRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection pool owned by the process entry point
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuoteRepository for DbQuoteRepository {
    async fn create(
        &self,
        ctx: &RequestContext,
        params: CreateQuoteParams,
    ) -> Result<i32, AppError> {
        let quote = entity::quote::ActiveModel {
            author: ActiveValue::Set(params.author),
            text: ActiveValue::Set(params.text),
            ..Default::default()
        };

        let result = entity::prelude::Quote::insert(quote)
            .exec(&self.db)
            .await
            .map_err(AppError::storage("failed to create quote"))?;

        tracing::debug!(parent: ctx.span(), id = result.last_insert_id, "inserted quote");

        Ok(result.last_insert_id)
    }

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Quote>, AppError> {
        let quotes = entity::prelude::Quote::find()
            .order_by_asc(entity::quote::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::storage("failed to list quotes"))?;

        tracing::debug!(parent: ctx.span(), count = quotes.len(), "listed quotes");

        Ok(quotes.into_iter().map(Quote::from_entity).collect())
    }

    async fn list_by_author(
        &self,
        ctx: &RequestContext,
        author: &str,
    ) -> Result<Vec<Quote>, AppError> {
        let quotes = entity::prelude::Quote::find()
            .filter(entity::quote::Column::Author.eq(author))
            .order_by_asc(entity::quote::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::storage(format!(
                "failed to query quotes by author '{}'",
                author
            )))?;

        tracing::debug!(parent: ctx.span(), author, count = quotes.len(), "listed quotes by author");

        Ok(quotes.into_iter().map(Quote::from_entity).collect())
    }

    async fn random_one(&self, ctx: &RequestContext) -> Result<Quote, AppError> {
        let quote = entity::prelude::Quote::find()
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(&self.db)
            .await
            .map_err(AppError::storage("failed to fetch random quote"))?
            .ok_or_else(|| AppError::NotFound("no quotes stored".to_string()))?;

        tracing::debug!(parent: ctx.span(), id = quote.id, "picked random quote");

        Ok(Quote::from_entity(quote))
    }

    async fn delete_by_id(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        let result = entity::prelude::Quote::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::storage(format!("failed to delete quote {}", id)))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("quote {} not found", id)));
        }

        tracing::debug!(parent: ctx.span(), id, "deleted quote");

        Ok(())
    }
}
