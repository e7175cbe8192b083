//! `rallyscope-media` — upload persistence and playback serving.
//!
//! The acceptance gate itself (`VideoFormat::from_filename`) lives in core;
//! this crate owns what happens after a filename passes it: writing the
//! bytes to the local store and serving them back for playback preview.

pub mod media_server;
pub mod store;

pub use media_server::media_router;
pub use store::UploadStore;
