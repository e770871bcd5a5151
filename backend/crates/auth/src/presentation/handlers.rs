//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, ConfirmPasswordResetInput,
    ConfirmPasswordResetUseCase, Principal, RequestPasswordResetUseCase, SignInInput,
    SignInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::notifier::ResetNotifier;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AckResponse, ChangePasswordRequest, CurrentUserResponse, ForgotPasswordRequest, PublicProfile,
    ResetPasswordRequest, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, N>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            success: true,
            message: "User registered successfully.".to_string(),
            user: PublicProfile {
                username: output.username,
                email: output.email,
            },
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /login
pub async fn sign_in<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<SignInResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(SignInResponse {
        success: true,
        message: "User logged in successfully.".to_string(),
        username: output.username,
        email: output.email,
        token: output.token,
    }))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /logout
///
/// Sessions are stateless bearer tokens with no server-side record, so
/// logout is purely a client-side instruction to discard the token; the
/// service acknowledges unconditionally.
pub async fn sign_out(
    Extension(principal): Extension<Principal>,
) -> AuthResult<Json<AckResponse>> {
    tracing::debug!(user_id = %principal.user_id, "User logged out");

    Ok(Json(AckResponse::ok("User logged out successfully.")))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /user
pub async fn current_user(
    Extension(principal): Extension<Principal>,
) -> AuthResult<Json<CurrentUserResponse>> {
    Ok(Json(CurrentUserResponse {
        success: true,
        user: PublicProfile {
            username: principal.username,
            email: principal.email,
        },
    }))
}

// ============================================================================
// Change Password
// ============================================================================

/// POST /changepassword
pub async fn change_password<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<Json<AckResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone());

    let input = ChangePasswordInput {
        password: req.password,
        confirm_password: req.confirm_password,
    };

    let user_id = UserId::from_uuid(principal.user_id);
    use_case.execute(&user_id, input).await?;

    Ok(Json(AckResponse::ok("Password changed successfully.")))
}

// ============================================================================
// Forgot Password
// ============================================================================

/// POST /forgot-password
pub async fn forgot_password<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AuthResult<Json<AckResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    let use_case = RequestPasswordResetUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    use_case.execute(req.email).await?;

    Ok(Json(AckResponse::ok(
        "Password reset email sent. Please check your inbox.",
    )))
}

// ============================================================================
// Reset Password
// ============================================================================

/// POST /user-password-reset/{id}/{token}
pub async fn reset_password<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Path((id, token)): Path<(String, String)>,
    Json(req): Json<ResetPasswordRequest>,
) -> AuthResult<Json<AckResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    let use_case = ConfirmPasswordResetUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = ConfirmPasswordResetInput {
        password: req.password,
        confirm_password: req.confirm_password,
    };

    use_case.execute(&id, &token, input).await?;

    Ok(Json(AckResponse::ok("Password reset successfully.")))
}
