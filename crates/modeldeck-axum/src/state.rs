//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AppContext` containing the ports every API
/// handler needs (hub client, ollama client, settings, downloads).
pub type AppState = Arc<AppContext>;
