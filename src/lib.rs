//! # Tokengate API
//!
//! A request-gating service built with Rust and Axum. Every request to a
//! protected route passes a two-stage pipeline: a token verification
//! stage that validates a caller-supplied JWT and attaches the verified
//! identity to the request, and a role guard that enforces the route's
//! role requirement. Either stage may short-circuit with a classified
//! JSON error response; token issuance and user storage live outside
//! this service.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── tokengate-core/     # AuthError taxonomy, Role enumeration
//! ├── tokengate-config/   # Environment-sourced configuration
//! └── tokengate-auth/     # JWT claims, token creation/verification
//! src/
//! ├── middleware/         # Pipeline stages (verify_token, role guards)
//! ├── modules/            # Feature modules
//! │   └── boards/        # Access-test routes (/api/test/*)
//! ├── logging.rs          # Request logging middleware
//! ├── router.rs           # Main application router
//! └── state.rs            # Shared application state
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! request ── verify_token ── require_role ── handler
//!                │                │
//!                ├─ 403 "No token provided!"
//!                ├─ 401 "Unauthorized!"
//!                └────────────────└─ 403 "Require Admin Role!"
//! ```
//!
//! The caller presents the token in the `x-access-token` header. On
//! success the handler sees the token's subject and role through the
//! request context; on failure the response body carries a single
//! `message` field with the mapped status code.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_EXPIRY=86400
//! ALLOWED_ORIGINS=http://localhost:8081
//! ```

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use tokengate_auth;
pub use tokengate_config;
pub use tokengate_core;
