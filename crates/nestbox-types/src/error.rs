//! Error types for nestbox.

use std::io;

/// Errors produced by nestbox.
#[derive(Debug, thiserror::Error)]
pub enum NestBoxError {
    /// Rendering was started from a box that has a parent.
    #[error("render must be called from the master box (box {0} has a parent)")]
    InvalidMaster(usize),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NestBoxError>;
