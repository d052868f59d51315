//! # Tokengate Auth
//!
//! JWT claims and token utilities for the Tokengate API.
//!
//! This crate provides:
//!
//! - [`claims`]: the claim structure embedded in access tokens
//! - [`jwt`]: token creation and verification against an injected
//!   [`JwtConfig`](tokengate_config::JwtConfig)
//!
//! Verification is a single attempt per call: the signature is checked
//! against the configured secret and `exp` against the current time,
//! with every failure collapsed into
//! [`AuthError::InvalidToken`](tokengate_core::AuthError::InvalidToken).
//!
//! # Example
//!
//! ```ignore
//! use tokengate_auth::{create_token, verify_token};
//! use tokengate_config::JwtConfig;
//! use tokengate_core::Role;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_token("u1", Role::Admin, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "u1");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_token, verify_token};
