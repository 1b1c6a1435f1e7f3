//! Flat-file settings persistence for modeldeck.
//!
//! The only persistent state in the service is a single JSON settings file.
//! This crate implements the core `SettingsRepository` port against it.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod settings_file;

pub use settings_file::JsonSettingsStore;
