use crate::server::{
    data::quote::{DbQuoteRepository, QuoteRepository},
    error::AppError,
    middleware::request_context::RequestContext,
    model::quote::CreateQuoteParams,
};
use axum::http::Method;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod create;
mod delete_by_id;
mod list_all;
mod list_by_author;
mod random_one;

/// Builds a migrated test database and a repository over it.
async fn setup() -> (TestContext, DbQuoteRepository) {
    let mut test = TestBuilder::new()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let repo = DbQuoteRepository::new(test.db_handle().await.unwrap());

    (test, repo)
}

fn ctx() -> RequestContext {
    RequestContext::new(&Method::GET, "/quotes")
}

fn params(author: &str, text: &str) -> CreateQuoteParams {
    CreateQuoteParams {
        author: author.to_string(),
        text: text.to_string(),
    }
}
