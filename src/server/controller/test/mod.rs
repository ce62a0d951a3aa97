use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext};
use tokio::net::TcpListener;

use crate::server::{router::router, state::AppState};

mod quote;

/// A running server bound to an ephemeral local port.
///
/// Holds the test context so the in-memory database outlives every request made
/// through `client`.
struct TestApp {
    address: String,
    client: reqwest::Client,
    db: DatabaseConnection,
    _test: TestContext,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }
}

/// Spawns the full router over a freshly migrated in-memory database.
async fn spawn_app() -> TestApp {
    let mut test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db_handle().await.unwrap();

    let app = router().with_state(AppState::from_database(db.clone()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        client: reqwest::Client::new(),
        db,
        _test: test,
    }
}
