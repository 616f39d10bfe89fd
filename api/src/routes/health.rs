use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

/// GET /health
///
/// Liveness probe. Always returns 200 while the process is up.
///
/// ### Response
/// ```json
/// { "status": "ok" }
/// ```
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
