//! Quote service.
//!
//! A thin pass-through over the repository carrying the one business rule of the
//! system: a quote must have an author.

use async_trait::async_trait;

use crate::server::{
    data::quote::QuoteRepository,
    error::AppError,
    middleware::request_context::RequestContext,
    model::quote::{CreateQuoteParams, Quote},
};

/// Business capability for quotes consumed by the controllers.
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Creates a quote and returns its id.
    ///
    /// Fails with `AppError::InvalidInput` when the author is empty or whitespace only,
    /// without touching storage.
    async fn create(&self, ctx: &RequestContext, params: CreateQuoteParams)
        -> Result<i32, AppError>;

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Quote>, AppError>;

    async fn list_by_author(
        &self,
        ctx: &RequestContext,
        author: &str,
    ) -> Result<Vec<Quote>, AppError>;

    async fn random_one(&self, ctx: &RequestContext) -> Result<Quote, AppError>;

    async fn delete_by_id(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError>;
}

/// Default `QuoteService` delegating to any `QuoteRepository`.
pub struct DefaultQuoteService<R> {
    repo: R,
}

impl<R: QuoteRepository> DefaultQuoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: QuoteRepository> QuoteService for DefaultQuoteService<R> {
    async fn create(
        &self,
        ctx: &RequestContext,
        params: CreateQuoteParams,
    ) -> Result<i32, AppError> {
        if params.author.trim().is_empty() {
            return Err(AppError::InvalidInput("author is required".to_string()));
        }

        self.repo.create(ctx, params).await
    }

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Quote>, AppError> {
        self.repo.list_all(ctx).await
    }

    async fn list_by_author(
        &self,
        ctx: &RequestContext,
        author: &str,
    ) -> Result<Vec<Quote>, AppError> {
        self.repo.list_by_author(ctx, author).await
    }

    async fn random_one(&self, ctx: &RequestContext) -> Result<Quote, AppError> {
        self.repo.random_one(ctx).await
    }

    async fn delete_by_id(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        self.repo.delete_by_id(ctx, id).await
    }
}
