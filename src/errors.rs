// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Validation findings (cycles, isolated nodes, ...) are *not* errors; they
//! are reported inside [`crate::validate::ValidationResult`]. This enum only
//! covers operational failures: unreadable files, malformed documents, bad
//! configuration and snapshot precondition violations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipedagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate node id in pipeline: {0}")]
    DuplicateNodeId(String),

    #[error("Duplicate edge id in pipeline: {0}")]
    DuplicateEdgeId(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PipedagError>;
