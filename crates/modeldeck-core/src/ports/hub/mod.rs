//! Port for Hugging Face Hub operations.

mod client;
mod error;
mod types;

pub use client::HubClientPort;
pub use error::{HubPortError, HubPortResult};
pub use types::{HubModel, HubModelDetail, ListModelsQuery, ModelPage, SortField};
