//! Request processing middleware.
//!
//! - `request_context` - Assigns each request a correlation id and logging span

pub mod request_context;
