use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn healthcheck() -> impl IntoResponse {
    Json(json!({ "Status": "heart beating steady and strong" }))
}
