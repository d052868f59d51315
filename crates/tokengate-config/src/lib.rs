//! # Tokengate Config
//!
//! Configuration types for the Tokengate API.
//!
//! This crate provides configuration structures loaded from environment
//! variables, once at process startup:
//!
//! - [`jwt`]: signing secret and token lifetime
//! - [`cors`]: CORS allowed origins
//!
//! Configuration is never read ambiently per request. The binary loads
//! it in `main`, stores it in the shared application state, and the
//! middleware receives it from there — which also lets tests run with
//! distinct secrets without touching process-wide environment.
//!
//! # Example
//!
//! ```ignore
//! use tokengate_config::{CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
