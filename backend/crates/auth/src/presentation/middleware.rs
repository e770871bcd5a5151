//! Auth Middleware
//!
//! The authorization gate for protected routes. Extracts the bearer
//! token, verifies it, resolves the subject to a user record, and
//! attaches the authenticated [`Principal`] to the request. All failure
//! modes collapse to one Unauthorized response.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::AuthorizeUseCase;
use crate::domain::notifier::ResetNotifier;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::AuthAppState;

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// `None` for an absent or malformed header.
fn extract_bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that requires a valid session token
///
/// On success the wrapped handler finds a [`Principal`] in the request
/// extensions; on failure the request never reaches it.
///
/// [`Principal`]: crate::application::Principal
pub async fn require_session<R, N>(
    State(state): State<AuthAppState<R, N>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    N: ResetNotifier + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(&req).map(str::to_owned);

    let use_case = AuthorizeUseCase::new(state.repo.clone(), state.tokens.clone());

    let principal = use_case
        .execute(token.as_deref())
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_auth(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/user");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&req), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_missing_header() {
        let req = request_with_auth(None);
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_extract_malformed_header() {
        assert_eq!(
            extract_bearer_token(&request_with_auth(Some("abc.def.ghi"))),
            None
        );
        assert_eq!(
            extract_bearer_token(&request_with_auth(Some("Basic abc"))),
            None
        );
        assert_eq!(extract_bearer_token(&request_with_auth(Some("Bearer "))), None);
    }
}
