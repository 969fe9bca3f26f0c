use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness: answers as long as the process can serve requests.
pub async fn alive() -> impl IntoResponse {
    Json(json!({ "App Test": "Alive" }))
}
