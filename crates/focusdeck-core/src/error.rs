//! Core error types for focusdeck-core.
//!
//! A thiserror hierarchy; each subsystem gets its own enum and
//! everything converges on [`CoreError`] at the library boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential/session errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Remote collaborator errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the durable blob store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open blob store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Snapshot in slot '{slot}' could not be decoded: {message}")]
    CorruptSnapshot { slot: String, message: String },

    #[error("Blob store is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Credential/session errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("No provider token stored for {provider}")]
    MissingToken { provider: String },

    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    #[error("Keyring error: {0}")]
    Keyring(String),
}

/// Remote collaborator (calendar/music API) errors.
///
/// These are always caught at the call site and surfaced as non-blocking
/// notices; they never corrupt local state.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {service} failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned HTTP {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Unexpected {service} response shape: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },

    #[error("Access token expired and refresh-and-retry also failed")]
    AuthExpired,
}

/// Validation errors, rejected before any store mutation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid time range: end ({end}) must be after start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Daily priority list holds at most {max} tasks, got {got}")]
    TooManyPriorities { max: usize, got: usize },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(inner, _msg)
                if inner.code == rusqlite::ErrorCode::DatabaseLocked =>
            {
                StorageError::Locked
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<keyring::Error> for AuthError {
    fn from(err: keyring::Error) -> Self {
        AuthError::Keyring(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
