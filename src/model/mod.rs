//! Wire-level DTOs shared by the HTTP API.
//!
//! These types define the JSON shapes accepted and returned by the server. Server-side
//! domain models convert into them at the controller boundary.

pub mod quote;
