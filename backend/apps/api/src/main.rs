//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, PgUserRepository, SmtpConfig, SmtpNotifier, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token configuration
    let reset_link_base = env::var("RESET_LINK_BASE")
        .unwrap_or_else(|_| "http://localhost:3000/user-password-reset".to_string());

    let auth_config = if cfg!(debug_assertions) {
        AuthConfig {
            reset_link_base,
            ..AuthConfig::development()
        }
    } else {
        // In production, load secret from environment
        let token_secret =
            env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set in production");
        assert!(
            token_secret.len() >= 32,
            "JWT_SECRET_KEY must be at least 32 characters in production"
        );
        AuthConfig {
            token_secret,
            reset_link_base,
            ..Default::default()
        }
    };

    // Outbound reset mail
    let smtp_config = SmtpConfig {
        host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
        username: env::var("SMTP_USERNAME").expect("SMTP_USERNAME must be set in environment"),
        password: env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set in environment"),
        from: env::var("MAIL_FROM").expect("MAIL_FROM must be set in environment"),
    };
    let notifier = SmtpNotifier::new(smtp_config)
        .map_err(|e| anyhow::anyhow!("SMTP setup failed: {e}"))?;

    let repo = PgUserRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    // Build router; auth routes are mounted at the root
    let app = Router::new()
        .merge(auth_router(repo, notifier, auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(6000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
