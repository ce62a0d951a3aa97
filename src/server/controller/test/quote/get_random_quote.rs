use super::*;

#[tokio::test]
async fn returns_not_found_when_store_is_empty() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/quotes/random"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn returns_the_only_stored_quote() {
    let app = spawn_app().await;
    let stored = create_quote_by(&app.db, "Wilde").await.unwrap();

    let response = app
        .client
        .get(app.url("/quotes/random"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let quote: QuoteDto = response.json().await.unwrap();
    assert_eq!(quote.id, stored.id);
    assert_eq!(quote.author, "Wilde");
}

#[tokio::test]
async fn returns_one_of_the_stored_quotes() {
    let app = spawn_app().await;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(create_quote(&app.db).await.unwrap().id);
    }

    for _ in 0..5 {
        let quote: QuoteDto = app
            .client
            .get(app.url("/quotes/random"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(ids.contains(&quote.id));
    }
}
