//! `rallyscope-understanding` — the inference relay.
//!
//! Forwards uploaded video bytes plus the fixed coaching instruction to a
//! remote multimodal endpoint and hands the reply text back verbatim.

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::COACHING_PROMPT;
