//! Sign Up Use Case
//!
//! Registers a new user account.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up output: the public profile, nothing more
///
/// The password hash is never part of any response payload.
pub struct SignUpOutput {
    pub username: String,
    pub email: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // All three fields are required
        if input.username.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.trim().is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        let username = UserName::new(input.username)?;
        let email = Email::new(input.email)?;

        // Fast-path duplicate check; a concurrent race loser still surfaces
        // as EmailTaken through the store's unique constraint
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = PlainPassword::new(input.password)?;
        let password_hash = password.hash()?;

        let user = User::new(username, email, password_hash);
        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            "User registered"
        );

        Ok(SignUpOutput {
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        })
    }
}
