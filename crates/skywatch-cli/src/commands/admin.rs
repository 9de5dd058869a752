//! Admin account management commands.

use clap::{Args, Subcommand};

use skywatch_auth::{PasswordHasher, PasswordValidator};
use skywatch_core::config::AppConfig;
use skywatch_core::error::AppError;
use skywatch_database::repositories::UserRepository;
use skywatch_entity::user::UserRole;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin user
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Reset a user's password
    ResetPassword {
        /// Username
        #[arg(short, long)]
        username: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(super::input_error)
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: AppConfig) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Create {
            username,
            email,
            password,
        } => {
            let username = match username {
                Some(u) => u.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin username")
                    .interact_text()
                    .map_err(super::input_error)?,
            };

            let email = match email {
                Some(e) => Some(e.clone()),
                None => {
                    let e: String = dialoguer::Input::new()
                        .with_prompt("Admin email (optional, press Enter to skip)")
                        .allow_empty(true)
                        .interact_text()
                        .map_err(super::input_error)?;
                    if e.trim().is_empty() { None } else { Some(e) }
                }
            };

            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Admin password")?,
            };

            let state = super::app_state(config).await?;
            let user = state
                .user_service
                .create_account(&username, email.as_deref(), &password, UserRole::Admin)
                .await?;

            output::print_success(&format!(
                "Admin user '{}' created (id: {})",
                user.username, user.id
            ));
            state.db.close().await;
        }
        AdminCommand::ResetPassword { username, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("New password")?,
            };
            PasswordValidator::new(&config.auth).validate(&password)?;

            let db = super::connect(&config).await?;
            let user_repo = UserRepository::new(db.pool().clone());
            let user = user_repo
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

            let hash = PasswordHasher::new().hash_password(&password)?;
            user_repo.update_password(user.id, &hash).await?;

            output::print_success(&format!("Password reset for '{}'", user.username));
            db.close().await;
        }
    }

    Ok(())
}
