//! SeaORM entity definitions for the quotebook database.

pub mod prelude;
pub mod quote;
