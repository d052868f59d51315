//! # Tokengate Core
//!
//! Core types for the Tokengate API.
//!
//! This crate provides the foundational types shared across the workspace:
//!
//! - [`errors`]: the classified authentication error taxonomy with HTTP
//!   response conversion
//! - [`role`]: the closed set of roles a token may carry and a route may
//!   require
//!
//! # Example
//!
//! ```ignore
//! use tokengate_core::{AuthError, Role};
//!
//! fn guard(user_role: &str) -> Result<(), AuthError> {
//!     if user_role == Role::Admin.as_str() {
//!         Ok(())
//!     } else {
//!         Err(AuthError::InsufficientRole(Role::Admin))
//!     }
//! }
//! ```

pub mod errors;
pub mod role;

// Re-export commonly used types at crate root
pub use errors::AuthError;
pub use role::Role;
