//! Confirm Password Reset Use Case
//!
//! Second step of the forgot-password flow: verify the reset challenge
//! against the claimed user id and persist the new password hash.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Confirm password reset input
pub struct ConfirmPasswordResetInput {
    pub password: String,
    pub confirm_password: String,
}

/// Confirm password reset use case
pub struct ConfirmPasswordResetUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> ConfirmPasswordResetUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// `user_id` and `token` come from the reset link's path parameters
    pub async fn execute(
        &self,
        user_id: &str,
        token: &str,
        input: ConfirmPasswordResetInput,
    ) -> AuthResult<()> {
        // Confirmation is validated before the user lookup
        if input.password.trim().is_empty() || input.confirm_password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        if input.password != input.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        // An id that is not even a UUID cannot resolve to a record
        let user_id = UserId::parse(user_id).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.tokens.verify_reset_challenge(&user.user_id, token) {
            return Err(AuthError::InvalidToken);
        }

        let password = PlainPassword::new(input.password)?;
        let hash = password.hash()?;

        self.repo.update_password(&user.user_id, &hash).await?;

        tracing::info!(
            user_id = %user.user_id,
            "Password reset completed"
        );

        Ok(())
    }
}
