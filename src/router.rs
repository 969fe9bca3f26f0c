use axum::{http::Uri, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::handlers;

/// Builds the application router.
///
/// Only `GET` (and the `HEAD` axum derives from it) is routed; any other
/// method on a known path falls through to the same 404 as an unknown path.
pub fn app() -> Router {
    Router::new()
        .route("/", get(handlers::root::alive).fallback(not_found))
        .route(
            "/healthcheck",
            get(handlers::health::healthcheck).fallback(not_found),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request<_>| {
                tracing::info_span!("request", method = %request.method(), uri = %request.uri())
            },
        ))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}
