//! Start the Skywatch server.

use clap::Args;

use skywatch_core::config::AppConfig;
use skywatch_core::error::AppError;
use skywatch_database::migration::run_migrations;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip migrations even when `database.auto_migrate` is set
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    let db = super::connect(&config).await?;

    if config.database.auto_migrate && !args.no_migrate {
        run_migrations(db.pool()).await?;
    }

    skywatch_api::run_server(config, db).await
}
