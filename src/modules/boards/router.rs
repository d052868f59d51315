use axum::{Router, middleware, routing::get};

use crate::middleware::auth::verify_token;
use crate::middleware::role::{require_admin, require_moderator};
use crate::modules::boards::controller::{
    admin_board, moderator_board, public_content, user_board,
};
use crate::state::AppState;

/// Access-test routes exercising the full pipeline.
///
/// The stage order is declared here and nowhere else: the verification
/// layer wraps the whole protected group (outermost, runs first), and
/// each role guard wraps only its own route. `/all` carries no
/// middleware at all.
pub fn init_boards_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/user", get(user_board))
        .route(
            "/mod",
            get(moderator_board).layer(middleware::from_fn(require_moderator)),
        )
        .route(
            "/admin",
            get(admin_board).layer(middleware::from_fn(require_admin)),
        )
        .route_layer(middleware::from_fn_with_state(state, verify_token));

    Router::new()
        .route("/all", get(public_content))
        .merge(protected)
}
