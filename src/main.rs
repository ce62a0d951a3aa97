mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, logging, router::router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    logging::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;

    let app = router().with_state(AppState::from_database(db.clone()));

    let listener = TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Starting server on {}", config.bind_address());

    startup::serve(
        listener,
        app,
        config.shutdown_grace_period,
        startup::shutdown_signal(),
    )
    .await?;

    db.close().await?;

    tracing::info!("Server exited gracefully");

    Ok(())
}
