//! Registration, login and profile lookup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use skywatch_auth::jwt::{IssuedToken, JwtEncoder};
use skywatch_auth::password::{PasswordHasher, PasswordValidator};
use skywatch_core::error::AppError;
use skywatch_database::repositories::UserRepository;
use skywatch_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Minimum username length after trimming.
const MIN_USERNAME_LEN: usize = 3;

/// Self-registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Optional e-mail address for alert notifications.
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password.
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username (case-insensitive).
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    #[serde(flatten)]
    pub token: IssuedToken,
    /// The logged-in user.
    pub user: User,
}

/// Handles account creation, authentication and profile lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Register a regular user.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        self.create_account(&req.username, req.email.as_deref(), &req.password, UserRole::User)
            .await
    }

    /// Create an account with an explicit role.
    pub async fn create_account(
        &self,
        username: &str,
        email: Option<&str>,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let username = username.trim();
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(AppError::validation(format!(
                "Username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }

        let email = email.map(str::trim).filter(|e| !e.is_empty());
        if let Some(email) = email {
            if !looks_like_email(email) {
                return Err(AppError::validation("Invalid email format"));
            }
        }

        self.validator.validate(password)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: email.map(str::to_string),
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, role = %user.role, "User created");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let invalid = || AppError::authentication("Invalid username or password");

        let user = self
            .user_repo
            .find_by_username(req.username.trim())
            .await?
            .ok_or_else(invalid)?;

        if !self.hasher.verify_password(&req.password, &user.password_hash)? {
            warn!(username = %user.username, "Failed login attempt");
            return Err(invalid());
        }

        if !user.can_login() {
            return Err(AppError::authentication("Account is disabled"));
        }

        self.user_repo.update_last_login(user.id).await?;
        let token = self.encoder.issue(&user)?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse { token, user })
    }

    /// Profile of the current user.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(looks_like_email("alice@example.com"));
        assert!(!looks_like_email("alice"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("alice@localhost"));
    }
}
