//! Alert processing commands.

use clap::{Args, Subcommand};

use skywatch_core::config::AppConfig;
use skywatch_core::error::AppError;
use skywatch_worker::{ALERT_SWEEP_JOB, SweepSummary};

use crate::output::{self, OutputFormat};

/// Arguments for alert commands
#[derive(Debug, Args)]
pub struct AlertsArgs {
    /// Alert subcommand
    #[command(subcommand)]
    pub command: AlertsCommand,
}

/// Alert subcommands
#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// Evaluate every active alert once and send notifications
    Process,
}

/// Execute alert commands
pub async fn execute(
    args: &AlertsArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match args.command {
        AlertsCommand::Process => {
            let state = super::app_state(config).await?;
            if !state.config.mail.is_configured() {
                output::print_warning("SMTP is not configured; alerts are recorded without e-mail.");
            }

            let value = state.jobs.execute(ALERT_SWEEP_JOB).await.map_err(AppError::from)?;
            let summary: SweepSummary = serde_json::from_value(value)?;

            match format {
                OutputFormat::Json => {
                    output::print_value(&serde_json::to_value(summary)?, format);
                }
                OutputFormat::Table => {
                    println!("Alert processing complete:");
                    output::print_kv("Processed", &summary.processed.to_string());
                    output::print_kv("Triggered", &summary.triggered.to_string());
                    output::print_kv("Skipped", &summary.skipped.to_string());
                    output::print_kv("Errors", &summary.errors.to_string());
                }
            }

            state.db.close().await;
        }
    }

    Ok(())
}
