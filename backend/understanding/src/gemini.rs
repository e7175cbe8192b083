//! Video understanding via Gemini `generateContent`.
//!
//! One synchronous (non-streaming) request per upload: instruction text
//! plus the video bytes as base64 `inlineData`. Whatever goes wrong on the
//! wire becomes a single `RemoteCallFailure` carrying the underlying text.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use rallyscope_core::{AnalysisRequest, RallyError, VideoAnalyzer};
use serde_json::{Value, json};
use tracing::info;

/// Client for the Google Generative Language API.
///
/// The credential is injected at construction from config; there is no
/// module-level key.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

/// Build the non-streaming `generateContent` body: the instruction text
/// plus the video payload as inline data.
fn build_request_body(prompt: &str, mime_type: &str, data: &[u8]) -> Value {
    json!({
        "contents": [{ "parts": [
            { "text": prompt },
            { "inlineData": { "mimeType": mime_type, "data": STANDARD.encode(data) } }
        ]}]
    })
}

/// Pull the reply text out of a `generateContent` response body.
fn extract_text(body: &Value) -> Option<&str> {
    body["candidates"][0]["content"]["parts"][0]["text"].as_str()
}

#[async_trait]
impl VideoAnalyzer for GeminiClient {
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, RallyError> {
        info!(
            model = %self.model,
            mime = %request.mime_type,
            size = request.data.len(),
            "Sending video for analysis"
        );

        let body = build_request_body(&request.prompt, &request.mime_type, &request.data);
        let resp = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| RallyError::RemoteCallFailure(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(RallyError::RemoteCallFailure(format!("{status}: {text}")));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| RallyError::RemoteCallFailure(e.to_string()))?;

        match extract_text(&body) {
            Some(text) => {
                info!(reply_len = text.len(), "Analysis complete");
                Ok(text.to_string())
            }
            None => Err(RallyError::RemoteCallFailure(format!(
                "unexpected response shape: {body}"
            ))),
        }
    }
}
