//! Token Service
//!
//! Issues and verifies the two bearer capabilities of the system, both
//! stateless signed JWTs (HS256):
//!
//! - **Session tokens**: `{sub: user_id}` under the global signing secret,
//!   5 day lifetime. Expiry is the only invalidation mechanism; there is
//!   no revocation list.
//! - **Reset challenges**: `{sub: user_id}` under a secret derived per
//!   user from the claimed user id and the global secret, 10 minute
//!   lifetime. A leaked global secret alone cannot forge a reset token
//!   for a specific account without that account's id, and a reset token
//!   can never pass session verification (different secret).
//!
//! The signing secret is injected at construction, never read from a
//! process-wide singleton, so tests can run with isolated secrets.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Claims carried by both token kinds
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id the token is bound to
    sub: String,
    /// Issued-at, seconds since epoch
    iat: i64,
    /// Expiry, seconds since epoch
    exp: i64,
}

/// Derive the per-user reset signing secret
///
/// Pure function of `(user_id, global_secret)`; kept free of hidden state
/// so it is independently testable.
pub fn derive_reset_secret(user_id: &UserId, global_secret: &str) -> String {
    format!("{}{}", user_id, global_secret)
}

/// Stateless token issuance and verification
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    session_ttl: Duration,
    reset_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, session_ttl: Duration, reset_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            session_ttl,
            reset_ttl,
        }
    }

    // ========================================================================
    // Session tokens
    // ========================================================================

    /// Issue a session token for a user, expiring 5 days from now
    pub fn issue_session(&self, user_id: &UserId) -> AuthResult<String> {
        Self::issue(self.secret.as_str(), user_id, Utc::now(), self.session_ttl)
    }

    /// Verify a session token and return the embedded subject id
    pub fn verify_session(&self, token: &str) -> AuthResult<UserId> {
        let claims = Self::verify(self.secret.as_str(), token)?;
        UserId::parse(&claims.sub).map_err(|_| AuthError::InvalidToken)
    }

    // ========================================================================
    // Reset challenges
    // ========================================================================

    /// Issue a reset challenge, signed with the per-user derived secret
    pub fn issue_reset_challenge(&self, user_id: &UserId) -> AuthResult<String> {
        let secret = derive_reset_secret(user_id, &self.secret);
        Self::issue(&secret, user_id, Utc::now(), self.reset_ttl)
    }

    /// Verify a reset challenge against the *claimed* user id
    ///
    /// The id comes out-of-band (a URL path parameter); the per-user
    /// secret is recomputed from it. Returns `false` on any failure:
    /// malformed token, wrong secret, wrong subject, or expiry. Never
    /// errors.
    pub fn verify_reset_challenge(&self, user_id: &UserId, token: &str) -> bool {
        let secret = derive_reset_secret(user_id, &self.secret);
        match Self::verify(&secret, token) {
            Ok(claims) => claims.sub == user_id.to_string(),
            Err(_) => false,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Sign `{sub: user_id}` with the given secret and lifetime
    ///
    /// `issued_at` is a parameter so tests can mint already-expired tokens.
    fn issue(
        secret: &str,
        user_id: &UserId,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> AuthResult<String> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            exp: iat + ttl.as_secs() as i64,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Mint a session token with a caller-chosen issue time (expiry tests)
    #[cfg(test)]
    pub(crate) fn issue_session_at(
        &self,
        user_id: &UserId,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        Self::issue(self.secret.as_str(), user_id, issued_at, self.session_ttl)
    }

    /// Mint a reset challenge with a caller-chosen issue time (expiry tests)
    #[cfg(test)]
    pub(crate) fn issue_reset_challenge_at(
        &self,
        user_id: &UserId,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let secret = derive_reset_secret(user_id, &self.secret);
        Self::issue(&secret, user_id, issued_at, self.reset_ttl)
    }

    /// Verify signature and expiry, with zero leeway
    fn verify(secret: &str, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}
