//! Playback preview server: serves stored uploads over HTTP.
//!
//! Provides a simple Axum router that serves uploaded videos by filename,
//! with a browser-correct content type so the presentation layer can render
//! an inline playback widget.

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use rallyscope_core::VideoFormat;
use std::{path::PathBuf, sync::Arc};
use tokio::fs;
use tracing::{debug, warn};

use crate::store::is_suspicious;

/// State shared by media server routes.
#[derive(Clone)]
pub struct MediaServerState {
    pub media_dir: Arc<PathBuf>,
}

/// Build the playback preview Axum router.
///
/// Mount at `/media` prefix:
///   GET /media/:filename  — serve a stored upload
pub fn media_router(media_dir: PathBuf) -> Router {
    let state = MediaServerState {
        media_dir: Arc::new(media_dir),
    };
    Router::new()
        .route("/:filename", get(serve_upload))
        .with_state(state)
}

/// GET /:filename — serve a stored upload from the local store.
async fn serve_upload(
    Path(filename): Path<String>,
    State(state): State<MediaServerState>,
) -> Response {
    if is_suspicious(&filename) {
        warn!(filename = %filename, "Rejected suspicious media path");
        return (StatusCode::BAD_REQUEST, "Invalid filename").into_response();
    }

    let path = state.media_dir.join(&filename);
    debug!(path = %path.display(), "Serving stored upload");

    match fs::read(&path).await {
        Ok(bytes) => {
            // Stored files all passed the allow-list gate; anything else in
            // the directory is served as an opaque blob.
            let mime = VideoFormat::from_filename(&filename)
                .map(|format| format.playback_mime())
                .unwrap_or("application/octet-stream");

            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, mime.parse().unwrap());
            headers.insert(
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{filename}\"").parse().unwrap(),
            );
            headers.insert(
                header::CONTENT_LENGTH,
                bytes.len().to_string().parse().unwrap(),
            );

            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            (StatusCode::NOT_FOUND, "Upload not found").into_response()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read stored upload");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read upload").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspicious_names_rejected() {
        assert!(is_suspicious("../etc/passwd"));
        assert!(is_suspicious("a/b.mp4"));
        assert!(is_suspicious(""));
        assert!(!is_suspicious("rally.mp4"));
    }
}
