//! collection_core - Collection state and the remote catalog seam
//!
//! This library provides:
//! - CollectionState / CollectionEvent: the pure state machine over the
//!   owned and available card lists
//! - CatalogSource: async seam to the catalog service, with an in-memory
//!   implementation for tests and native demos and a browser HTTP
//!   implementation (wasm32 targets)
//! - Session: the event-driven shell that joins the paired search fetches
//! - ClientConfig: TOML configuration for the catalog client

mod catalog;
mod config;
mod session;
mod state;

#[cfg(target_arch = "wasm32")]
mod http;

pub use catalog::{CatalogSource, MemoryCatalog};
pub use config::ClientConfig;
pub use session::Session;
pub use state::{CollectionEvent, CollectionState};

#[cfg(target_arch = "wasm32")]
pub use http::HttpCatalog;

use std::path::PathBuf;
use thiserror::Error;

/// Error talking to the catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or non-success status. Non-fatal: state is left
    /// unchanged and retry is user-initiated (a fresh search).
    #[error("Network error fetching '{url}': {message}")]
    Network { url: String, message: String },
    /// The service answered, but the body did not decode. Degraded to an
    /// empty result set by the session shell.
    #[error("Malformed response from '{url}': {message}")]
    Malformed { url: String, message: String },
}

/// Error loading client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error: {message}")]
    Validation { message: String },
}
