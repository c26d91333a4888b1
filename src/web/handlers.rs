use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;

use super::static_files;
use crate::config::AppConfig;
use crate::relay::sender::send_datagram;

pub fn router(config: AppConfig) -> Router {
    let state = Arc::new(config);

    Router::new()
        .route("/", get(index_page).post(submit))
        .route("/message", get(message_page).post(submit))
        .fallback(fallback)
        .with_state(state)
}

async fn index_page(State(config): State<Arc<AppConfig>>) -> Response {
    static_files::page(&config, "index.html", StatusCode::OK).await
}

async fn message_page(State(config): State<Arc<AppConfig>>) -> Response {
    static_files::page(&config, "message.html", StatusCode::OK).await
}

/// Accepts a form submission: the body is handed off as a datagram and the
/// client is redirected right away. Relay failures are logged, never surfaced;
/// the redirect does not wait for persistence.
async fn submit(State(config): State<Arc<AppConfig>>, body: Bytes) -> Response {
    if let Err(e) = send_datagram(&body, config.relay_addr).await {
        tracing::warn!("Failed to relay submission: {}", e);
    }

    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Everything outside the fixed routes: POSTs are submissions regardless of
/// path, GETs fall through to static file lookup.
async fn fallback(
    State(config): State<Arc<AppConfig>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    if method == Method::POST {
        return submit(State(config), body).await;
    }

    static_files::serve(&config, uri.path()).await
}
