use thiserror::Error;

/// Top-level error type for the Rallyscope pipeline.
#[derive(Debug, Error)]
pub enum RallyError {
    /// Rejected at the extension gate, before any write or network call.
    #[error("unsupported video format \"{0}\": please upload an MP4, MOV, or AVI file")]
    UnsupportedFormat(String),

    /// Any failure of the remote analysis call. Carries the underlying
    /// failure text verbatim; never retried, never classified further.
    #[error("video analysis failed: {0}")]
    RemoteCallFailure(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
