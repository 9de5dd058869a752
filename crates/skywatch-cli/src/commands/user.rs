//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use skywatch_core::config::AppConfig;
use skywatch_core::error::AppError;
use skywatch_core::types::pagination::PageRequest;
use skywatch_database::repositories::UserRepository;
use skywatch_service::CleanupOutcome;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Users per page
        #[arg(long, default_value_t = 50)]
        per_page: u64,
    },
    /// Disable all alerts of a user, or delete the user entirely
    Cleanup {
        /// Username
        username: String,
        /// Delete the user and every related record
        #[arg(long)]
        delete: bool,
        /// Skip the confirmation prompt for --delete
        #[arg(short, long)]
        yes: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// Username
    username: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Status
    status: String,
    /// Last login
    last_login: String,
    /// Created at
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        UserCommand::List { page, per_page } => {
            let db = super::connect(&config).await?;
            let user_repo = UserRepository::new(db.pool().clone());
            let users = user_repo
                .find_all(&PageRequest::new(*page, *per_page))
                .await?;

            let rows: Vec<UserRow> = users
                .items
                .iter()
                .map(|u| UserRow {
                    username: u.username.clone(),
                    email: u.email.clone().unwrap_or_default(),
                    role: u.role.to_string(),
                    status: u.status.to_string(),
                    last_login: u
                        .last_login_at
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "never".to_string()),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!(
                    "Page {} of {} ({} users)",
                    users.page, users.total_pages, users.total_items
                );
            }
            db.close().await;
        }
        UserCommand::Cleanup {
            username,
            delete,
            yes,
        } => {
            if *delete && !*yes {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Delete user '{username}' with all searches, alerts and locations?"
                    ))
                    .default(false)
                    .interact()
                    .map_err(super::input_error)?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let state = super::app_state(config).await?;
            let outcome = state
                .admin_user_service
                .cleanup_user(username, *delete)
                .await?;

            match outcome {
                CleanupOutcome::AlertsDisabled { deactivated } => output::print_success(&format!(
                    "Disabled {deactivated} alert(s) for user '{username}'"
                )),
                CleanupOutcome::Deleted => output::print_success(&format!(
                    "Deleted user '{username}' and related records"
                )),
            }
            state.db.close().await;
        }
    }

    Ok(())
}
