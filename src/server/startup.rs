use std::{future::Future, sync::Arc, time::Duration};

use axum::Router;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::{net::TcpListener, sync::Notify};

use crate::server::{
    config::{Config, PoolConfig},
    error::AppError,
};

/// Connects to the database and runs pending migrations.
///
/// Builds a connection pool from the configured URL and pool limits, retrying the initial
/// connect according to the pool's retry policy so the server can start before the
/// database is reachable. Once connected, all pending SeaORM migrations are applied, so
/// the `quote` table exists before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Every connect attempt failed, or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let opt = connect_options(&config.database_url, &config.pool);

    let db = connect_with_retry(opt, &config.pool).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

fn connect_options(database_url: &str, pool: &PoolConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .connect_timeout(pool.connect_timeout)
        .idle_timeout(pool.idle_timeout)
        .max_lifetime(pool.max_lifetime)
        .test_before_acquire(pool.test_before_acquire)
        .sqlx_logging(false);

    if let Some(schema) = &pool.schema {
        opt.set_schema_search_path(schema.clone());
    }

    opt
}

async fn connect_with_retry(
    opt: ConnectOptions,
    pool: &PoolConfig,
) -> Result<DatabaseConnection, AppError> {
    let mut attempt = 0;

    loop {
        match Database::connect(opt.clone()).await {
            Ok(db) => return Ok(db),
            Err(e) if attempt < pool.connect_retries => {
                attempt += 1;
                tracing::warn!(
                    attempt,
                    retries = pool.connect_retries,
                    error = %e,
                    "Database connection failed, retrying in {:?}",
                    pool.connect_retry_delay
                );
                tokio::time::sleep(pool.connect_retry_delay).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// When the shutdown future completes, the listener stops accepting connections and
/// in-flight requests are given `grace_period` to finish. Requests still running after
/// that are dropped, which cancels their pending storage calls.
///
/// # Returns
/// - `Ok(())` - Server stopped, gracefully or after the grace period elapsed
/// - `Err(AppError::IoErr)` - The server failed while accepting connections
/// - `Err(AppError::InternalError)` - The server task panicked
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    grace_period: Duration,
    shutdown: F,
) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send,
{
    let stop = Arc::new(Notify::new());
    let server_stop = stop.clone();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_stop.notified().await })
            .await
    });

    tokio::select! {
        result = &mut server => return flatten(result),
        _ = shutdown => {
            tracing::info!("Shutdown signal received");
            stop.notify_one();
        }
    }

    match tokio::time::timeout(grace_period, &mut server).await {
        Ok(result) => flatten(result),
        Err(_) => {
            tracing::warn!(
                "In-flight requests did not finish within {:?}, aborting",
                grace_period
            );
            server.abort();
            Ok(())
        }
    }
}

fn flatten(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    result
        .map_err(|e| AppError::InternalError(format!("server task failed: {}", e)))?
        .map_err(AppError::from)
}

/// Resolves on Ctrl+C, or on SIGTERM where supported.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
