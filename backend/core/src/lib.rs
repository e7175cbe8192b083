pub mod error;
pub mod traits;
pub mod types;

pub use error::RallyError;
pub use traits::VideoAnalyzer;
pub use types::{AnalysisRequest, UploadedAsset, VideoFormat};
