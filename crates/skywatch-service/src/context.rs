//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skywatch_core::error::AppError;
use skywatch_entity::user::UserRole;

/// Who is acting on the current request.
///
/// Built from the verified bearer token and passed into every service
/// method that reads or writes per-user rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// Username from the token.
    pub username: String,
    /// Role at the time the token was issued.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            username: username.into(),
            role,
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fails with an authorization error unless the user is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization("Administrator access required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use skywatch_core::error::ErrorKind;

    use super::*;

    #[test]
    fn only_admins_pass_require_admin() {
        let admin = RequestContext::new(Uuid::new_v4(), "root", UserRole::Admin);
        let user = RequestContext::new(Uuid::new_v4(), "alice", UserRole::User);

        assert!(admin.require_admin().is_ok());
        assert_eq!(
            user.require_admin().unwrap_err().kind,
            ErrorKind::Authorization
        );
    }
}
