use super::*;
use chrono::{SubsecRound, Utc};

/// Tests creating a quote returns a storage-assigned id.
///
/// Verifies that the repository inserts author and text and returns the generated
/// positive id.
///
/// Expected: Ok with positive id and row persisted
#[tokio::test]
async fn creates_quote_with_generated_id() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    let id = repo
        .create(&ctx(), params("Twain", "Get your facts first."))
        .await?;

    assert!(id > 0);

    let stored = entity::prelude::Quote::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.author, "Twain");
    assert_eq!(stored.text, "Get your facts first.");

    Ok(())
}

/// Tests that the storage-assigned creation timestamp is not earlier than the call.
///
/// SQLite's clock resolves milliseconds, so the call time is compared at that
/// resolution. Several creates spaced apart rule out a whole-second default landing
/// on the right side by chance.
///
/// Expected: Ok with every `created_at` at or after the moment `create` was called
#[tokio::test]
async fn stamps_created_at_no_earlier_than_the_call() -> Result<(), AppError> {
    let (test, repo) = setup().await;
    let db = test.db.as_ref().unwrap();

    for i in 0..5 {
        let before = Utc::now().trunc_subsecs(3);
        let id = repo.create(&ctx(), params("Twain", &format!("quote {}", i))).await?;

        let stored = entity::prelude::Quote::find_by_id(id).one(db).await?.unwrap();
        assert!(
            stored.created_at >= before,
            "created_at {} is earlier than call time {}",
            stored.created_at,
            before
        );

        tokio::time::sleep(std::time::Duration::from_millis(130)).await;
    }

    Ok(())
}

/// Tests that consecutive creates receive distinct ids.
///
/// Expected: Ok with strictly increasing ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), AppError> {
    let (_test, repo) = setup().await;

    let first = repo.create(&ctx(), params("A", "one")).await?;
    let second = repo.create(&ctx(), params("A", "two")).await?;

    assert_ne!(first, second);
    assert!(second > first);

    Ok(())
}

/// Tests that the repository does not validate the author itself.
///
/// The non-empty author rule lives in the service layer; storage accepts whatever
/// it is given.
///
/// Expected: Ok with row persisted
#[tokio::test]
async fn stores_empty_author_when_called_directly() -> Result<(), AppError> {
    let (_test, repo) = setup().await;

    let id = repo.create(&ctx(), params("", "anonymous")).await?;

    assert!(id > 0);

    Ok(())
}

/// Tests that a storage failure is reported as a storage error.
///
/// Runs against a database without the quote table so the insert fails.
///
/// Expected: Err(AppError::StorageErr) with operation context
#[tokio::test]
async fn wraps_driver_failure_as_storage_error() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let repo = DbQuoteRepository::new(test.db_handle().await.unwrap());

    let result = repo.create(&ctx(), params("Twain", "x")).await;

    match result {
        Err(AppError::StorageErr { context, .. }) => {
            assert_eq!(context, "failed to create quote")
        }
        other => panic!("expected StorageErr, got {:?}", other),
    }
}
