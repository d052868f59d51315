use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::role::Role;

/// Classified authentication/authorization failure.
///
/// Every variant is terminal for its request: the pipeline short-circuits
/// with the mapped HTTP response and never retries. Malformed, forged,
/// and expired tokens are all collapsed into [`AuthError::InvalidToken`]
/// so the response does not disclose which check failed.
#[derive(Debug)]
pub enum AuthError {
    /// The token header was absent or empty.
    NoToken,
    /// The token was malformed, carried a bad signature, or had expired.
    InvalidToken,
    /// The token was valid but its role does not match the route's requirement.
    InsufficientRole(Role),
    /// Non-classified failure outside the verification pipeline (token encoding).
    Internal(Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::NoToken => StatusCode::FORBIDDEN,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientRole(_) => StatusCode::FORBIDDEN,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The externally visible message, matching the wire contract exactly.
    pub fn message(&self) -> String {
        match self {
            AuthError::NoToken => "No token provided!".to_string(),
            AuthError::InvalidToken => "Unauthorized!".to_string(),
            AuthError::InsufficientRole(role) => format!("Require {} Role!", role),
            AuthError::Internal(_) => "Internal server error!".to_string(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        AuthError::Internal(err.into())
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "message": self.message()
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_token_maps_to_forbidden() {
        let err = AuthError::NoToken;
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.message(), "No token provided!");
    }

    #[test]
    fn test_invalid_token_maps_to_unauthorized() {
        let err = AuthError::InvalidToken;
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Unauthorized!");
    }

    #[test]
    fn test_insufficient_role_names_the_requirement() {
        let err = AuthError::InsufficientRole(Role::Admin);
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.message(), "Require Admin Role!");

        let err = AuthError::InsufficientRole(Role::Moderator);
        assert_eq!(err.message(), "Require Moderator Role!");
    }

    #[test]
    fn test_internal_does_not_leak_cause() {
        let err = AuthError::internal(anyhow::anyhow!("key material unavailable"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error!");
    }
}
