use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::handlers::AppState;

/// Creates the router for the merchandiser module.
/// Placeholder until the merchandising workflows land.
pub fn merchandiser_routes() -> Router<AppState> {
    Router::new().route("/", get(module_info))
}

async fn module_info() -> impl IntoResponse {
    Json(json!({
        "module": "merchandiser",
        "status": "placeholder",
        "description": "Merchandiser department module - coming soon",
        "features": []
    }))
}
