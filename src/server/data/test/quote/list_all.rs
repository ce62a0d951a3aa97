use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector, not an error
#[tokio::test]
async fn returns_empty_vec_for_empty_table() -> Result<(), AppError> {
    let (_test, repo) = setup().await;

    let quotes = repo.list_all(&ctx()).await?;

    assert!(quotes.is_empty());

    Ok(())
}

/// Tests that a newly created quote appears exactly once in the listing.
///
/// Expected: Ok with one additional entry matching the input
#[tokio::test]
async fn includes_created_quote_once() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::create_quote(db).await?;
    let before = repo.list_all(&ctx()).await?;

    let id = repo.create(&ctx(), params("Wilde", "Be yourself.")).await?;
    let after = repo.list_all(&ctx()).await?;

    assert_eq!(after.len(), before.len() + 1);
    let matching: Vec<_> = after.iter().filter(|q| q.id == id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].author, "Wilde");
    assert_eq!(matching[0].text, "Be yourself.");

    Ok(())
}

/// Tests that quotes are returned in id order.
///
/// Expected: Ok with ascending ids
#[tokio::test]
async fn orders_by_id() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        factory::create_quote(db).await?;
    }

    let quotes = repo.list_all(&ctx()).await?;
    let ids: Vec<i32> = quotes.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();

    assert_eq!(quotes.len(), 4);
    assert_eq!(ids, sorted);

    Ok(())
}
