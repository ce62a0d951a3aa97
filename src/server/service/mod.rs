//! Service layer for business logic.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services implement business rules and validation and work with domain models rather
//! than DTOs or entity models.

pub mod quote;
