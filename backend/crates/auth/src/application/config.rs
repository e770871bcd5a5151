//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is
//! explicit injected state, not a process-wide singleton, so each test
//! can run with its own.

use std::time::Duration;

use crate::domain::token::TokenService;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Global token signing secret
    pub token_secret: String,
    /// Session token lifetime (5 days)
    pub session_ttl: Duration,
    /// Reset challenge lifetime (10 minutes)
    pub reset_ttl: Duration,
    /// Base URL the reset link is built from; the final link is
    /// `{reset_link_base}/{user_id}/{token}`
    pub reset_link_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            session_ttl: Duration::from_secs(5 * 24 * 3600), // 5 days
            reset_ttl: Duration::from_secs(10 * 60),         // 10 minutes
            reset_link_base: "http://localhost:3000/user-password-reset".to_string(),
        }
    }
}

impl AuthConfig {
    /// Development configuration: a fresh random signing secret per process
    ///
    /// Used by debug builds and tests; production injects the secret from
    /// the environment.
    pub fn development() -> Self {
        let secret = format!(
            "{}{}",
            uuid::Uuid::new_v4().simple(),
            uuid::Uuid::new_v4().simple()
        );
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Build the token service from this config
    pub fn token_service(&self) -> TokenService {
        TokenService::new(self.token_secret.clone(), self.session_ttl, self.reset_ttl)
    }

    /// Build the reset link delivered to the user
    pub fn reset_link(&self, user_id: &crate::domain::value_object::UserId, token: &str) -> String {
        format!(
            "{}/{}/{}",
            self.reset_link_base.trim_end_matches('/'),
            user_id,
            token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::UserId;

    #[test]
    fn test_default_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl, Duration::from_secs(432_000));
        assert_eq!(config.reset_ttl, Duration::from_secs(600));
    }

    #[test]
    fn test_reset_link_shape() {
        let config = AuthConfig {
            reset_link_base: "https://app.example.com/user-password-reset/".to_string(),
            ..Default::default()
        };
        let id = UserId::new();
        let link = config.reset_link(&id, "tok");
        assert_eq!(
            link,
            format!("https://app.example.com/user-password-reset/{}/tok", id)
        );
    }

    #[test]
    fn test_development_secrets_differ() {
        let a = AuthConfig::development();
        let b = AuthConfig::development();
        assert!(!a.token_secret.is_empty());
        assert_ne!(a.token_secret, b.token_secret);
    }
}
