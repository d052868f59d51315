use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use tokengate_auth::jwt;
use tokengate_core::AuthError;

use crate::state::AppState;

/// Header carrying the caller's access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Identity attached to a request after successful token verification.
///
/// Written exactly once by [`verify_token`] and read-only afterwards:
/// the role guard and handlers see the same values for the life of the
/// request. Never shared across requests.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub user_role: String,
}

/// Token verification stage.
///
/// Extracts the token from [`ACCESS_TOKEN_HEADER`], verifies it against
/// the secret carried in [`AppState`], and attaches an [`AuthContext`]
/// before forwarding to the next stage. A missing or empty header
/// short-circuits with [`AuthError::NoToken`]; any verification failure
/// short-circuits with [`AuthError::InvalidToken`]. The request is never
/// mutated on a failure path, and verification is attempted exactly once.
pub async fn verify_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::NoToken)?;

    let claims = jwt::verify_token(token, &state.jwt_config)?;

    req.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
        user_role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Extractor handing verified identity to handlers.
///
/// Only valid below the [`verify_token`] layer. A route that runs this
/// without a prior successful verification violates the pipeline
/// contract and is rejected.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
