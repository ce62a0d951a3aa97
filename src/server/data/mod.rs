//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They use SeaORM entity models internally and return domain models so the service
//! layer never touches the storage representation.

pub mod quote;

#[cfg(test)]
mod test;
