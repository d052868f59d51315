//! Middleware for the verification-and-authorization pipeline.
//!
//! Each protected route group runs an explicitly ordered pair of stages.
//! Every stage either forwards the request or short-circuits with an
//! [`AuthError`](tokengate_core::AuthError) response:
//!
//! 1. [`auth::verify_token`] extracts the `x-access-token` header,
//!    validates the token against the configured secret, and attaches an
//!    [`auth::AuthContext`] to the request.
//! 2. [`role::require_admin`] / [`role::require_moderator`] compare the
//!    attached role to the route's requirement, exact match only.
//!
//! The verification stage never depends on the role stage; the role
//! stage reads only the context the verification stage populated. The
//! composition order is declared at the router
//! (`modules/boards/router.rs`), verification outermost.

pub mod auth;
pub mod role;
