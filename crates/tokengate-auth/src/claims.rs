//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in an access token.
///
/// These are trusted for authorization decisions only after
/// [`verify_token`](crate::jwt::verify_token) has checked the signature
/// and expiry. The `role` claim stays a raw string on purpose: a validly
/// signed token carrying an unknown role value must still verify, and
/// then be denied by the role guard rather than rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (opaque user id)
    pub sub: String,
    /// Role wire value, e.g. "admin"
    pub role: String,
    /// Issued-at timestamp (Unix seconds)
    pub iat: usize,
    /// Expiration timestamp (Unix seconds)
    pub exp: usize,
}
