use super::*;

/// Tests deleting an existing quote.
///
/// Expected: Ok with the row removed from subsequent listings
#[tokio::test]
async fn deletes_existing_quote() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    let keep = factory::create_quote(db).await?;
    let remove = factory::create_quote(db).await?;

    repo.delete_by_id(&ctx(), remove.id).await?;

    let remaining = repo.list_all(&ctx()).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    Ok(())
}

/// Tests deleting an id that was never assigned.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() {
    let (_test, repo) = setup().await;

    let result = repo.delete_by_id(&ctx(), 9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests that a second delete of the same id fails.
///
/// Expected: first Ok, second Err(AppError::NotFound)
#[tokio::test]
async fn second_delete_fails_with_not_found() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    let quote = factory::create_quote(db).await?;

    repo.delete_by_id(&ctx(), quote.id).await?;
    let second = repo.delete_by_id(&ctx(), quote.id).await;

    assert!(matches!(second, Err(AppError::NotFound(_))));

    Ok(())
}
