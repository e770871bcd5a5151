//! Change Password Use Case
//!
//! Replaces the authenticated user's password hash. Existing session
//! tokens stay valid until natural expiry; this non-revocation policy is
//! a deliberate part of the contract.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub password: String,
    pub confirm_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `user_id` is the authenticated principal's id from the gate
    pub async fn execute(&self, user_id: &UserId, input: ChangePasswordInput) -> AuthResult<()> {
        if input.password.trim().is_empty() || input.confirm_password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        if input.password != input.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let password = PlainPassword::new(input.password)?;
        let hash = password.hash()?;

        self.repo.update_password(user_id, &hash).await?;

        tracing::info!(
            user_id = %user_id,
            "Password changed"
        );

        Ok(())
    }
}
