//! Upload-and-analyze endpoint: the linear pipeline behind `POST /api/analyze`.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use rallyscope_core::{AnalysisRequest, RallyError, UploadedAsset};
use rallyscope_understanding::COACHING_PROMPT;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::server::GatewayState;

/// Successful analysis reply. `analysis` is the model's text verbatim.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub file: String,
    pub media_url: String,
    pub analysis: String,
}

/// POST /api/analyze — multipart form with one `video` part carrying a
/// filename and the file bytes.
pub async fn analyze_video(State(state): State<GatewayState>, mut multipart: Multipart) -> Response {
    let (filename, bytes) = match read_video_part(&mut multipart).await {
        Ok(Some(part)) => part,
        Ok(None) => {
            return error_response(StatusCode::BAD_REQUEST, "missing \"video\" part in upload");
        }
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    // Request-scoped id so same-name uploads are distinguishable in logs.
    let request_id = Uuid::new_v4();
    info!(%request_id, file = %filename, size = bytes.len(), "Received upload");

    match run_analysis(&state, &filename, &bytes).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            warn!(%request_id, error = %e, "Analysis pipeline failed");
            let status = match &e {
                RallyError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                RallyError::RemoteCallFailure(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, &e.to_string())
        }
    }
}

/// Validate, store, and relay one upload.
///
/// The extension gate runs before any write; a failed relay leaves the
/// stored file on disk.
pub async fn run_analysis(
    state: &GatewayState,
    filename: &str,
    bytes: &[u8],
) -> Result<AnalyzeResponse, RallyError> {
    let asset = UploadedAsset::new(filename, Bytes::copy_from_slice(bytes))?;
    let path = state.store.save(&asset.name, &asset.bytes).await?;

    let data = tokio::fs::read(&path).await.map_err(RallyError::Storage)?;
    let request = AnalysisRequest {
        prompt: COACHING_PROMPT.to_string(),
        mime_type: asset.format.relay_mime().to_string(),
        data: data.into(),
    };

    let analysis = state.analyzer.analyze(request).await?;
    Ok(AnalyzeResponse {
        file: filename.to_string(),
        media_url: format!("/media/{filename}"),
        analysis,
    })
}

async fn read_video_part(multipart: &mut Multipart) -> anyhow::Result<Option<(String, Bytes)>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("video") {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let bytes = field.bytes().await?;
            return Ok(Some((filename, bytes)));
        }
    }
    Ok(None)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
