//! Application error types with rich context

use std::fmt::Display;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Malformed persisted record under '{key}': {reason}")]
    MalformedPersistedRecord { key: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Selection Errors
    // ─────────────────────────────────────────────────────────────
    #[error("'{value}' is not a valid {field}")]
    InvalidSelection { field: &'static str, value: String },

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn malformed_record(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPersistedRecord {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_selection(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSelection {
            field,
            value: value.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Errors caused by bad input or bad stored data rather than a broken
    /// environment. The CLI reports these without a backtrace.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::MalformedPersistedRecord { .. }
                | Error::InvalidSelection { .. }
                | Error::Storage { .. }
                | Error::Json(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait turning foreign errors into [`Error::Storage`]
pub trait ResultExt<T> {
    /// Wrap the error as `"<context>: <error>"`; `context` only runs on failure
    fn storage_context<C, F>(self, context: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn storage_context<C, F>(self, context: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::storage(format!("{}: {}", context(), e)))
    }
}
