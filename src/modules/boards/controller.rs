use axum::Json;

use crate::middleware::auth::AuthContext;
use crate::modules::boards::model::{BoardResponse, ProfileResponse};

/// Public content, reachable without a token.
pub async fn public_content() -> Json<BoardResponse> {
    Json(BoardResponse {
        message: "Public Content.".to_string(),
    })
}

/// Content for any authenticated caller. Echoes the identity the
/// verification stage attached, demonstrating claim propagation.
pub async fn user_board(ctx: AuthContext) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: ctx.user_id,
        role: ctx.user_role,
    })
}

/// Moderator-gated content.
pub async fn moderator_board() -> Json<BoardResponse> {
    Json(BoardResponse {
        message: "Moderator Content.".to_string(),
    })
}

/// Admin-gated content.
pub async fn admin_board() -> Json<BoardResponse> {
    Json(BoardResponse {
        message: "Admin Content.".to_string(),
    })
}
