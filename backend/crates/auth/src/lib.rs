//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits, token service
//! - `application/` - Use cases and application services
//! - `infra/` - Database and mail implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup with username + email + password
//! - Credential login issuing stateless bearer session tokens
//! - Authenticated password change
//! - Two-step email-based password reset
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (fixed work factor 10)
//! - Session tokens are signed JWTs, 5 day lifetime, no server-side state
//! - Reset challenges are signed with a per-user derived secret and live
//!   10 minutes; verification is the only validity check
//! - Protected routes go through a single authorization gate that collapses
//!   every failure mode to one Unauthorized signal

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use infra::smtp::{SmtpConfig, SmtpNotifier};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
