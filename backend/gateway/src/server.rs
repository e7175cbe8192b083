//! Main HTTP gateway server: routing and startup.

use anyhow::Result;
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use rallyscope_core::VideoAnalyzer;
use rallyscope_media::{UploadStore, media_router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

use crate::analyze;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub store: Arc<UploadStore>,
    pub analyzer: Arc<dyn VideoAnalyzer>,
}

/// Build the gateway router:
///   POST /api/analyze     — upload a video, get the coaching text back
///   GET  /api/health      — liveness
///   GET  /media/:filename — playback preview of a stored upload
pub fn router(state: GatewayState) -> Router {
    let media_dir = state.store.dir().to_path_buf();
    Router::new()
        .route("/api/analyze", post(analyze::analyze_video))
        .route("/api/health", get(health))
        .with_state(state)
        .nest("/media", media_router(media_dir))
        // No size limit is enforced in code; the UI only advises short clips.
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Starts the Axum HTTP server for the gateway.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
