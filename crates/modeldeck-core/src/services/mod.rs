//! Core services built on the port traits.

mod downloads;

pub use downloads::DownloadSimulator;
