use serde::Serialize;

#[derive(Serialize)]
pub struct BoardResponse {
    pub message: String,
}

/// Identity echoed back to an authenticated caller, taken straight from
/// the request context populated by the verification stage.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub role: String,
}
