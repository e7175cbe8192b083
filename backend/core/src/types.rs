//! Shared data types for the upload-and-analyze pipeline.

use crate::error::RallyError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Accepted upload formats. The extension allow-list is the only acceptance
/// gate: no content sniffing, no size limit enforced in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Mp4,
    Mov,
    Avi,
}

impl VideoFormat {
    /// Parse a format from a filename: the substring after the last `.`,
    /// lower-cased. Anything outside the allow-list (including a missing
    /// extension) is `UnsupportedFormat`.
    pub fn from_filename(name: &str) -> Result<Self, RallyError> {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "mp4" => Ok(Self::Mp4),
            "mov" => Ok(Self::Mov),
            "avi" => Ok(Self::Avi),
            _ => Err(RallyError::UnsupportedFormat(name.to_string())),
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Mov => "mov",
            Self::Avi => "avi",
        }
    }

    /// MIME type sent to the inference endpoint. This is literally
    /// `video/<ext>`, which is what the endpoint accepts for inline video
    /// data; it is NOT the browser-correct type for MOV and AVI.
    pub fn relay_mime(&self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Mov => "video/mov",
            Self::Avi => "video/avi",
        }
    }

    /// Browser-correct MIME type used when serving the stored file back for
    /// playback preview.
    pub fn playback_mime(&self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Mov => "video/quicktime",
            Self::Avi => "video/x-msvideo",
        }
    }
}

/// A named byte blob accepted at the upload gate. Created per request,
/// written once to the store, never mutated.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    pub name: String,
    pub format: VideoFormat,
    pub bytes: Bytes,
}

impl UploadedAsset {
    /// Validate a filename against the allow-list and wrap the payload.
    /// Fails before any side effect when the extension is not accepted.
    pub fn new(name: impl Into<String>, bytes: Bytes) -> Result<Self, RallyError> {
        let name = name.into();
        let format = VideoFormat::from_filename(&name)?;
        Ok(Self {
            name,
            format,
            bytes,
        })
    }
}

/// One request to the remote model: the fixed instruction plus the video
/// payload tagged with its relay MIME type. Constructed fresh per upload;
/// never persisted.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub prompt: String,
    pub mime_type: String,
    pub data: Bytes,
}
