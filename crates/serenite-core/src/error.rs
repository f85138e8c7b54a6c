//! Core error types for serenite-core.
//!
//! Validation errors are surfaced synchronously to the caller and never
//! mutate state. Storage errors are caught at the record-store boundary
//! and reported as diagnostics; the in-memory model stays authoritative.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for serenite-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer state-machine errors
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Record validation errors
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Timer-specific errors.
#[derive(Error, Debug)]
pub enum TimerError {
    /// Non-positive duration supplied to `arm`
    #[error("Invalid session duration: {duration_secs} seconds (must be > 0)")]
    InvalidDuration { duration_secs: u32 },

    /// `arm` called while a session is active
    #[error("A '{exercise}' session is already active; stop it before arming a new one")]
    SessionAlreadyActive { exercise: String },
}

/// Record validation errors.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Rating outside its declared bounds
    #[error("Invalid value for '{field}': {value} (allowed 0..={max})")]
    InvalidRating { field: &'static str, value: u8, max: u8 },

    /// Non-positive completion duration
    #[error("Invalid completion duration: {duration_secs} seconds (must be > 0)")]
    InvalidDuration { duration_secs: u32 },
}

/// Storage-specific errors. Always non-fatal: callers degrade to
/// in-memory-only operation for the affected record.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Read or write against a named record failed
    #[error("Storage unavailable for record '{key}': {message}")]
    Unavailable { key: String, message: String },

    /// Named record exists but does not decode
    #[error("Corrupt payload for record '{key}': {message}")]
    Corrupt { key: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
