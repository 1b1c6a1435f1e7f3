//! Hugging Face Hub client for modeldeck.
//!
//! Provides the `HubClientPort` implementation used by the web adapter:
//! model listing with approximated pagination, and single-model detail
//! lookups. Each operation performs at most one upstream HTTP request.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultHubClient is meant to be
// used through the HubClientPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod paging;
mod port;
mod transform;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultHubClient;

// Configuration
pub use config::HubClientConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
