//! Local filesystem store for uploaded videos.

use rallyscope_core::RallyError;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Filesystem store for uploaded videos.
///
/// Writes land at `<dir>/<filename>`, overwriting any previous upload with
/// the same name (last-write-wins). Files are never cleaned up.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist one upload and return its path, the handle for the relay
    /// stage. Creates the store directory on first use (idempotent).
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, RallyError> {
        if is_suspicious(filename) {
            return Err(RallyError::Storage(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid upload filename: {filename}"),
            )));
        }

        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes).await?;

        info!(path = %path.display(), size = bytes.len(), "Stored upload");
        Ok(path)
    }
}

/// Basic path sanitization: reject traversal and separators.
pub fn is_suspicious(filename: &str) -> bool {
    filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
}
