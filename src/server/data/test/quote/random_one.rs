use super::*;
use std::collections::HashSet;

/// Tests random selection on an empty table.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_when_empty() {
    let (_test, repo) = setup().await;

    let result = repo.random_one(&ctx()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests random selection with exactly one row.
///
/// Expected: Ok with that row
#[tokio::test]
async fn returns_the_only_row() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::quote::QuoteFactory::new(db)
        .author("Solo")
        .text("Only quote")
        .build()
        .await?;

    let quote = repo.random_one(&ctx()).await?;

    assert_eq!(quote.id, stored.id);
    assert_eq!(quote.author, "Solo");
    assert_eq!(quote.text, "Only quote");

    Ok(())
}

/// Tests that random selection draws from the whole table.
///
/// With three rows and enough draws, every row is expected to be picked at least once.
///
/// Expected: Ok with all ids observed
#[tokio::test]
async fn draws_from_all_rows() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    let ids: HashSet<i32> = factory::create_quotes_by(db, "Many", 3)
        .await?
        .into_iter()
        .map(|q| q.id)
        .collect();

    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(repo.random_one(&ctx()).await?.id);
        if seen == ids {
            break;
        }
    }

    assert_eq!(seen, ids);

    Ok(())
}
