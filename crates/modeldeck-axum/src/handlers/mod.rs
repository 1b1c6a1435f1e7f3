//! HTTP request handlers.
//!
//! Handlers map transport-level inputs to port calls and port results to
//! response payloads; no business logic lives here.

pub mod models;
pub mod ollama;
pub mod settings;
