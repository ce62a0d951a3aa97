//! HTTP request handlers.
//!
//! Controllers extract parameters and the request context, call the service layer, and
//! convert domain models to DTOs. Failures are returned as `AppError` and rendered by its
//! `IntoResponse` implementation.

pub mod quote;

#[cfg(test)]
mod test;
