//! Custom error types for Tidechat
//!
//! This module provides a unified error type that can be used throughout
//! the application and is compatible with Tauri's command error handling.

use thiserror::Error;

/// Main error type for Tidechat operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors surfaced by the Tauri runtime (windowing, menus, tray)
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// General errors with a message
    #[error("{0}")]
    General(String),
}

impl ShellError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Convert ShellError to String for Tauri command compatibility
impl From<ShellError> for String {
    fn from(err: ShellError) -> Self {
        err.to_string()
    }
}

/// Convert String errors to ShellError
impl From<String> for ShellError {
    fn from(s: String) -> Self {
        Self::General(s)
    }
}

/// Convert &str errors to ShellError
impl From<&str> for ShellError {
    fn from(s: &str) -> Self {
        Self::General(s.to_string())
    }
}

/// Result type alias using ShellError
pub type Result<T> = std::result::Result<T, ShellError>;

/// Serialize ShellError for Tauri
impl serde::Serialize for ShellError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
