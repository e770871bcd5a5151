//! Authorize Use Case
//!
//! The authorization gate applied to protected operations: verify the
//! bearer session token, resolve the subject to a user record, and hand
//! back an authenticated principal. Every failure mode collapses to one
//! Unauthorized signal.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::error::{AuthError, AuthResult};

/// The authenticated principal attached to a request
///
/// Carries the public profile only; the password hash is excluded.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

/// Authorize use case
pub struct AuthorizeUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> AuthorizeUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Resolve a bearer token to an authenticated principal
    ///
    /// `token` is the value after the `Bearer ` prefix; `None` means the
    /// header was absent or malformed.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<Principal> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let user_id = self.tokens.verify_session(token)?;

        // A deleted or missing subject is indistinguishable from a bad
        // token at the gate
        let user = self
            .repo
            .find_by_id(&user_id)
            .await
            .map_err(|_| AuthError::InvalidToken)?
            .ok_or(AuthError::InvalidToken)?;

        Ok(Principal {
            user_id: user.user_id.into_uuid(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        })
    }
}
