//! Skywatch Server: weather dashboard with alert notifications.
//!
//! Main entry point that loads configuration, prepares the database and
//! starts the HTTP server.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use skywatch_core::config::AppConfig;
use skywatch_database::DatabasePool;
use skywatch_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e:#}");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment.
fn load_configuration() -> anyhow::Result<AppConfig> {
    let dir = std::env::var("SKYWATCH_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("SKYWATCH_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&dir, &env)
        .with_context(|| format!("loading '{dir}' (env: {env})"))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Skywatch v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database)
        .await
        .context("database connection failed")?;

    if config.database.auto_migrate {
        tracing::info!("Running database migrations...");
        run_migrations(db.pool())
            .await
            .context("migration failed")?;
    }

    skywatch_api::run_server(config, db).await?;
    Ok(())
}
