//! Core domain types.

mod download;

pub use download::DownloadReceipt;
