use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No route for {path}")]
    NotFound { path: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { path } => {
                tracing::debug!(%path, "no route matched");
                let body = Json(json!({
                    "error": "Not Found",
                    "path": path
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}
