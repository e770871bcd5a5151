//! Sign In Use Case
//!
//! Authenticates a user and issues a session token.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub username: String,
    pub email: String,
    /// Stateless bearer session token (5 day lifetime)
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(input.email)?;

        // Unknown email is NotFound, wrong password is Unauthorized
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password =
            PlainPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue_session(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            "User signed in"
        );

        Ok(SignInOutput {
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            token,
        })
    }
}
