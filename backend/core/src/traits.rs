use crate::error::RallyError;
use crate::types::AnalysisRequest;
use async_trait::async_trait;

/// Seam between the upload pipeline and the remote model.
///
/// The concrete implementation holds its own credential (injected from
/// config at construction); callers only see the request/response contract,
/// which keeps the gateway testable with doubles.
#[async_trait]
pub trait VideoAnalyzer: Send + Sync {
    /// Forward one request to the model and return its free-text reply
    /// verbatim. The reply is opaque: no parsing, no schema validation.
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, RallyError>;
}
