//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each request handler through
//! Axum's state extraction. It holds no mutable in-process state; the only shared
//! resource behind it is the database connection pool owned by the repository.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    data::quote::DbQuoteRepository,
    service::quote::{DefaultQuoteService, QuoteService},
};

/// Application state containing the service capabilities used by controllers.
///
/// Controllers depend on `dyn QuoteService` rather than a concrete type so that the
/// storage and business layers can be substituted independently.
#[derive(Clone)]
pub struct AppState {
    /// Quote business operations.
    pub quote_service: Arc<dyn QuoteService>,
}

impl AppState {
    /// Creates a new application state from an already-constructed service.
    pub fn new(quote_service: Arc<dyn QuoteService>) -> Self {
        Self { quote_service }
    }

    /// Wires the default service over the database repository.
    ///
    /// # Arguments
    /// - `db` - Connection pool; the repository keeps a clone of the handle
    pub fn from_database(db: DatabaseConnection) -> Self {
        let repo = DbQuoteRepository::new(db);

        Self::new(Arc::new(DefaultQuoteService::new(repo)))
    }
}
