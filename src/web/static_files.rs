use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::path::{Component, Path, PathBuf};

use crate::config::AppConfig;

/// Serves one of the fixed HTML pages from the public directory.
pub async fn page(config: &AppConfig, name: &str, status: StatusCode) -> Response {
    match tokio::fs::read(config.public_dir.join(name)).await {
        Ok(bytes) => (status, Html(bytes)).into_response(),
        Err(e) => {
            tracing::error!("Failed to read page {}: {}", name, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// The fixed "not found" page with a 404 status.
pub async fn not_found(config: &AppConfig) -> Response {
    page(config, "error.html", StatusCode::NOT_FOUND).await
}

/// Serves the file at `request_path` relative to the public directory, with a
/// MIME type guessed from the extension. Missing files, directories, and
/// paths escaping the public directory all get the 404 page.
pub async fn serve(config: &AppConfig, request_path: &str) -> Response {
    let Some(full_path) = resolve(&config.public_dir, request_path) else {
        return not_found(config).await;
    };

    match tokio::fs::read(&full_path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&full_path).first_or_text_plain();
            ([(header::CONTENT_TYPE, mime.as_ref())], bytes).into_response()
        }
        Err(_) => not_found(config).await,
    }
}

/// Maps a request path onto the public directory, rejecting any component
/// that is not a plain name (`..`, roots, prefixes).
pub(crate) fn resolve(public_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));

    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(public_dir.join(relative))
}
