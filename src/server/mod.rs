//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the quote service,
//! including API endpoints, business logic, data access, and infrastructure. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error taxonomy and HTTP response mapping
//! - **Middleware** (`middleware/`) - Per-request correlation context
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - `tracing` subscriber setup
//! - **State** (`state`) - Service wiring shared with every handler
//! - **Startup** (`startup`) - Database connection, migrations, and graceful serving
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and the middleware assigns a request context
//! 2. **Controller** extracts parameters, converts DTOs to params, calls the service
//! 3. **Service** validates input and delegates to the repository
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
