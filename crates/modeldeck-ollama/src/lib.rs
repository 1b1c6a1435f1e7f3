//! Ollama server client for modeldeck.
//!
//! Implements the `OllamaClientPort` against a caller-supplied base URL:
//! a reachability probe, a local-model listing, and a pull request. All
//! operations answer with structured outcomes instead of errors, since
//! "can I reach it" is the question the caller is asking.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod types;
mod url;

pub use client::OllamaClient;
pub use url::normalize_base_url;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
