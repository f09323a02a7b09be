// src/errors.rs

//! Crate-wide error type and result alias.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImapsyncError {
    /// A host definition is incomplete. Raised before anything is spawned.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for the sync process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("Sync process did not finish within {0:?}; it was killed")]
    Timeout(Duration),

    #[error("Failed to send feedback email: {0}")]
    Notify(#[from] mail_send::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ImapsyncError>;
