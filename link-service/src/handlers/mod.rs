use axum::Json;
use std::sync::Arc;

use eventlink_shared::models::MessageResponse;

pub mod capture_handlers;
pub mod offline_handlers;
pub mod share_handlers;

/// State shared by every handler
pub struct AppState<S: ?Sized> {
    pub store: Arc<S>,
    /// Host placed in generated share URLs
    pub link_host: String,
}

pub type SharedState<S> = Arc<AppState<S>>;

// GET /health
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "ok".to_string(),
    })
}
