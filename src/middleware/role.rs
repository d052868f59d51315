//! Role authorization stage.
//!
//! Runs after [`verify_token`](crate::middleware::auth::verify_token)
//! and reads only the [`AuthContext`] that stage attached. Comparison is
//! exact string equality against the required role's wire value: there
//! is no hierarchy, so no role implicitly satisfies another.

use axum::{extract::Request, middleware::Next, response::Response};

use tokengate_core::{AuthError, Role};

use crate::middleware::auth::AuthContext;

/// Checks the attached role against a route's requirement.
///
/// A missing context means the guard ran without a prior successful
/// verification; that contract violation always denies.
pub fn check_role(ctx: Option<&AuthContext>, required: Role) -> Result<(), AuthError> {
    match ctx {
        Some(ctx) if ctx.user_role == required.as_str() => Ok(()),
        _ => Err(AuthError::InsufficientRole(required)),
    }
}

/// Middleware driver for [`check_role`]: forwards on a match,
/// short-circuits with 403 otherwise.
pub async fn require_role(req: Request, next: Next, required: Role) -> Result<Response, AuthError> {
    check_role(req.extensions().get::<AuthContext>(), required)?;
    Ok(next.run(req).await)
}

/// Admin-only routes.
///
/// ```ignore
/// use axum::{Router, middleware, routing::get};
/// use crate::middleware::role::require_admin;
///
/// let admin_routes = Router::new()
///     .route("/admin", get(admin_handler).layer(middleware::from_fn(require_admin)));
/// ```
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AuthError> {
    require_role(req, next, Role::Admin).await
}

/// Moderator-only routes.
pub async fn require_moderator(req: Request, next: Next) -> Result<Response, AuthError> {
    require_role(req, next, Role::Moderator).await
}
