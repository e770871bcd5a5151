//! Request Password Reset Use Case
//!
//! First step of the forgot-password flow: issue a reset challenge for
//! the account and deliver it by email as a link embedding the user id
//! and the token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::notifier::ResetNotifier;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Request password reset use case
pub struct RequestPasswordResetUseCase<R, N>
where
    R: UserRepository,
    N: ResetNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R, N> RequestPasswordResetUseCase<R, N>
where
    R: UserRepository,
    N: ResetNotifier,
{
    pub fn new(
        repo: Arc<R>,
        notifier: Arc<N>,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            repo,
            notifier,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, email: String) -> AuthResult<()> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(email)?;

        // Unregistered email is a 404; a delivery failure below is a 500.
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let token = self.tokens.issue_reset_challenge(&user.user_id)?;
        let link = self.config.reset_link(&user.user_id, &token);

        self.notifier
            .send_password_reset(&user.email, &link)
            .await?;

        // The link itself carries the challenge, so it never goes to the log
        tracing::info!(
            user_id = %user.user_id,
            "Password reset challenge issued"
        );

        Ok(())
    }
}
