//! Port for Ollama server operations.

mod client;
mod types;

pub use client::OllamaClientPort;
pub use types::{ConnectionProbe, LocalModel, ProbeStatus, PullOutcome, PullStatus};
