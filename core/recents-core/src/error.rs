//! Error types for recents-core operations.
//!
//! Most public readers never surface these: they log and return an empty
//! result. The `try_*` variants return them for callers that want the cause.

use std::path::PathBuf;

/// All errors that can occur in recents-core operations.
#[derive(Debug, thiserror::Error)]
pub enum RecentsError {
    // ─────────────────────────────────────────────────────────────────────
    // URI Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Malformed URI (no scheme): {uri}")]
    MalformedUri { uri: String },

    #[error("Unrecognized remote authority: {0}")]
    UnrecognizedAuthority(String),

    // ─────────────────────────────────────────────────────────────────────
    // Decode Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("JSON parsing error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings file malformed: {path}: {details}")]
    SettingsMalformed { path: PathBuf, details: String },

    #[error("Configuration file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    // ─────────────────────────────────────────────────────────────────────
    // Store / I/O Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("State database error: {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using RecentsError.
pub type Result<T> = std::result::Result<T, RecentsError>;
