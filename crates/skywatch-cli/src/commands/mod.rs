//! CLI command definitions and dispatch.

pub mod admin;
pub mod alerts;
pub mod migrate;
pub mod serve;
pub mod user;
pub mod worker;

use clap::{Parser, Subcommand};

use skywatch_api::AppState;
use skywatch_core::config::AppConfig;
use skywatch_core::error::AppError;
use skywatch_database::DatabasePool;

use crate::output::OutputFormat;

/// Skywatch: weather dashboard administration
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load (`config/{env}.toml`)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Skywatch server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Alert processing
    Alerts(alerts::AlertsArgs),
    /// On-demand jobs
    Worker(worker::WorkerArgs),
    /// User management
    User(user::UserArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
}

impl Cli {
    /// Log level used when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        match self.command {
            Commands::Serve(_) | Commands::Alerts(_) => "info",
            _ => "warn",
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config_dir, &self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(config).await,
            Commands::Alerts(args) => alerts::execute(args, config, self.format).await,
            Commands::Worker(args) => worker::execute(args, config, self.format).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::Admin(args) => admin::execute(args, config).await,
        }
    }
}

/// Helper: connect to the database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: connect and wire the full application state
pub async fn app_state(config: AppConfig) -> Result<AppState, AppError> {
    let db = connect(&config).await?;
    skywatch_api::build_state(config, db).await
}

/// Helper: map a dialoguer failure into an `AppError`
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}
