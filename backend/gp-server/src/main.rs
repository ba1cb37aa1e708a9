use gp_server::error::Result as ServerErrorResult;
use gp_server::{AppState, SprintService, build_router, logger};

use gp_config::Config;
use gp_db::{DatabaseLocation, SprintRepository};
use gp_github::GithubClient;

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting gp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let location = if config.database.is_in_memory() {
        DatabaseLocation::InMemory
    } else {
        DatabaseLocation::File(config.database_path()?)
    };
    let pool = gp_db::connect(&location, config.database.max_connections).await?;

    // Run migrations
    gp_db::run_migrations(&pool).await?;

    // Sprint service over the SQLite repository
    let sprints = SprintService::new(
        Arc::new(SprintRepository::new(pool.clone())),
        config.sprints.missing_row,
    );

    // GitHub relay (optional)
    let github = if config.github.enabled {
        Some(GithubClient::new(
            &config.github.api_base_url,
            &config.github.user_agent,
            Duration::from_secs(config.github.timeout_secs),
        )?)
    } else {
        warn!("GitHub relay DISABLED - /metrics routes are not registered");
        None
    };

    // Build router
    let app = build_router(AppState { sprints, github });

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C. If the signal cannot be watched, never resolves.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
