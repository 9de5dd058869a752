//! On-demand job commands.

use clap::{Args, Subcommand};

use skywatch_core::config::AppConfig;
use skywatch_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for worker commands
#[derive(Debug, Args)]
pub struct WorkerArgs {
    /// Worker subcommand
    #[command(subcommand)]
    pub command: WorkerCommand,
}

/// Worker subcommands
#[derive(Debug, Subcommand)]
pub enum WorkerCommand {
    /// List registered job types
    List,
    /// Run one job now and print its summary
    Run {
        /// Job type to run
        job_type: String,
    },
}

/// Execute worker commands
pub async fn execute(
    args: &WorkerArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::app_state(config).await?;

    match &args.command {
        WorkerCommand::List => {
            println!("Registered jobs:");
            for job_type in state.jobs.registered_types() {
                println!("  {job_type}");
            }
        }
        WorkerCommand::Run { job_type } => {
            if !state.jobs.has_handler(job_type) {
                return Err(AppError::not_found(format!(
                    "Unknown job type '{job_type}'. Known: {}",
                    state.jobs.registered_types().join(", ")
                )));
            }

            let summary = state.jobs.execute(job_type).await.map_err(AppError::from)?;
            output::print_success(&format!("Job '{job_type}' finished"));
            output::print_value(&summary, format);
        }
    }

    state.db.close().await;
    Ok(())
}
