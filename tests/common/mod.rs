use axum::Router;
use axum::body::Body;
use axum::http::Request;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use tokengate::router::init_router;
use tokengate::state::AppState;
use tokengate_auth::Claims;
use tokengate_config::{CorsConfig, JwtConfig};
use tokengate_core::Role;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: 3600,
    }
}

pub fn setup_test_app() -> Router {
    let state = AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec![],
        },
    };
    init_router(state)
}

pub fn issue_token(sub: &str, role: Role) -> String {
    tokengate_auth::create_token(sub, role, &test_jwt_config()).unwrap()
}

/// Encode a token with arbitrary claims and secret, bypassing the
/// issuance helper. Used for expired, unknown-role, and wrong-secret
/// tokens.
pub fn encode_token(sub: &str, role: &str, iat: i64, exp: i64, secret: &str) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        role: role.to_string(),
        iat: iat as usize,
        exp: exp as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn expired_token(sub: &str, role: &str) -> String {
    let now = Utc::now().timestamp();
    encode_token(sub, role, now - 7200, now - 3600, TEST_SECRET)
}

pub fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method("GET").uri(path);
    let builder = match token {
        Some(token) => builder.header("x-access-token", token),
        None => builder,
    };
    builder.body(Body::empty()).unwrap()
}
