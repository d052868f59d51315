//! Token creation and verification.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret carried in
//! [`JwtConfig`]. The config is always passed in explicitly so tests can
//! verify against distinct secrets without mutating process state.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use tokengate_config::JwtConfig;
use tokengate_core::{AuthError, Role};

use crate::claims::Claims;

/// Creates a signed access token for the given subject and role.
///
/// `iat` is the current time and `exp` is `iat` plus the configured
/// token lifetime.
///
/// # Errors
///
/// Returns [`AuthError::Internal`] if encoding fails.
pub fn create_token(sub: &str, role: Role, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: sub.to_string(),
        role: role.as_str().to_string(),
        iat: now,
        exp: now + jwt_config.token_expiry as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AuthError::internal)
}

/// Verifies a token's signature and expiry, returning the embedded claims.
///
/// A single verification attempt: no retries, and verification does not
/// consume the token, so repeated calls with the same unexpired token
/// yield the same claims.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] if the token is malformed, the
/// signature does not match, or `exp` is in the past. The causes are
/// deliberately collapsed so callers cannot distinguish forgery from
/// expiry.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    // No clock-skew allowance: expired means strictly past `exp`.
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            token_expiry: 3600,
        }
    }

    fn encode_with_exp(sub: &str, role: &str, iat: usize, exp: usize, secret: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            role: role.to_string(),
            iat,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_token_success() {
        let config = get_test_jwt_config();

        let result = create_token("u1", Role::Admin, &config);

        assert!(result.is_ok());
        let token = result.unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let config = get_test_jwt_config();

        let token = create_token("u1", Role::Admin, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_verify_token_garbage() {
        let config = get_test_jwt_config();
        let result = verify_token("not-a-token", &config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();

        let token = create_token("u1", Role::Admin, &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            token_expiry: 3600,
        };

        let result = verify_token(&token, &wrong_config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_token_tampered_signature() {
        let config = get_test_jwt_config();

        let token = create_token("u1", Role::Admin, &config).unwrap();
        let (rest, signature) = token.rsplit_once('.').unwrap();
        let flipped = if signature.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{}.{}{}", rest, flipped, &signature[1..]);

        let result = verify_token(&tampered, &config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_token_tampered_payload() {
        let config = get_test_jwt_config();

        // Same claims signed with another secret, spliced onto a genuine
        // header: the signature no longer covers the payload.
        let genuine = create_token("u1", Role::User, &config).unwrap();
        let forged = encode_with_exp(
            "u1",
            "admin",
            Utc::now().timestamp() as usize,
            Utc::now().timestamp() as usize + 3600,
            "attacker-controlled-secret-32-characters!!",
        );
        let genuine_header = genuine.split('.').next().unwrap();
        let mut forged_parts = forged.split('.');
        forged_parts.next();
        let spliced = format!(
            "{}.{}.{}",
            genuine_header,
            forged_parts.next().unwrap(),
            forged_parts.next().unwrap()
        );

        let result = verify_token(&spliced, &config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;

        let token = encode_with_exp("u1", "admin", now - 7200, now - 3600, &config.secret);

        let result = verify_token(&token, &config);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_token_idempotent() {
        let config = get_test_jwt_config();

        let token = create_token("u1", Role::Moderator, &config).unwrap();

        let first = verify_token(&token, &config).unwrap();
        let second = verify_token(&token, &config).unwrap();

        assert_eq!(first.sub, second.sub);
        assert_eq!(first.role, second.role);
        assert_eq!(first.iat, second.iat);
        assert_eq!(first.exp, second.exp);
    }

    #[test]
    fn test_verify_token_unknown_role_still_verifies() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;

        let token = encode_with_exp("u1", "superadmin", now, now + 3600, &config.secret);

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.role, "superadmin");
    }
}
