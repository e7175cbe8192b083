//! `rallyscope-gateway` — the HTTP presentation boundary.
//!
//! One linear pipeline per upload: validate extension, persist, relay to
//! the analyzer, render the reply. No queueing, no retries, no resumption.

pub mod analyze;
pub mod server;

pub use server::{GatewayState, start_server};
