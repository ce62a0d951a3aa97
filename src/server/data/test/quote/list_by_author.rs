use super::*;

/// Tests filtering by author among mixed rows.
///
/// Inserts N quotes by "A" and M quotes by another author.
///
/// Expected: Ok with exactly N entries, all by "A"
#[tokio::test]
async fn returns_only_matching_author() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::create_quotes_by(db, "A", 3).await?;
    factory::create_quotes_by(db, "B", 2).await?;

    let quotes = repo.list_by_author(&ctx(), "A").await?;

    assert_eq!(quotes.len(), 3);
    assert!(quotes.iter().all(|q| q.author == "A"));

    Ok(())
}

/// Tests querying an author with no quotes.
///
/// Expected: Ok with empty vector, not an error
#[tokio::test]
async fn returns_empty_vec_for_unknown_author() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::create_quote_by(db, "Known").await?;

    let quotes = repo.list_by_author(&ctx(), "NoSuchAuthor").await?;

    assert!(quotes.is_empty());

    Ok(())
}

/// Tests that matching is exact rather than prefix or case-insensitive.
///
/// Expected: Ok with only the exact match
#[tokio::test]
async fn matches_author_exactly() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::create_quote_by(db, "Twain").await?;
    factory::create_quote_by(db, "Mark Twain").await?;
    factory::create_quote_by(db, "twain").await?;

    let quotes = repo.list_by_author(&ctx(), "Twain").await?;

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].author, "Twain");

    Ok(())
}
