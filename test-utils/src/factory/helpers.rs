//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique default
/// field values to prevent accidental collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Seeds `count` quotes attributed to `author`.
///
/// # Arguments
/// - `db` - Database connection
/// - `author` - Author name shared by every created quote
/// - `count` - Number of quotes to create
///
/// # Returns
/// - `Ok(Vec<entity::quote::Model>)` - Created quotes in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_quotes_by(
    db: &DatabaseConnection,
    author: &str,
    count: usize,
) -> Result<Vec<entity::quote::Model>, DbErr> {
    let mut quotes = Vec::with_capacity(count);
    for _ in 0..count {
        quotes.push(crate::factory::quote::create_quote_by(db, author).await?);
    }

    Ok(quotes)
}
