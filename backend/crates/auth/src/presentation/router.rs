//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::notifier::ResetNotifier;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::infra::smtp::SmtpNotifier;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware;

/// Create the auth router with the PostgreSQL store and SMTP notifier
pub fn auth_router(repo: PgUserRepository, notifier: SmtpNotifier, config: AuthConfig) -> Router {
    auth_router_generic(repo, notifier, config)
}

/// Create an auth router for any store and notifier implementation
pub fn auth_router_generic<R, N>(repo: R, notifier: N, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        tokens: Arc::new(config.token_service()),
        config: Arc::new(config),
    };

    // Protected routes sit behind the authorization gate
    let protected = Router::new()
        .route("/logout", post(handlers::sign_out))
        .route("/user", get(handlers::current_user))
        .route("/changepassword", post(handlers::change_password::<R, N>))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_session::<R, N>,
        ));

    Router::new()
        .route("/signup", post(handlers::sign_up::<R, N>))
        .route("/login", post(handlers::sign_in::<R, N>))
        .route("/forgot-password", post(handlers::forgot_password::<R, N>))
        .route(
            "/user-password-reset/{id}/{token}",
            post(handlers::reset_password::<R, N>),
        )
        .merge(protected)
        .with_state(state)
}
