//! Error types and handling for Leyden
//!
//! This module defines the error types used throughout the application,
//! providing consistent error handling and reporting.

use thiserror::Error;

/// Result type alias for Leyden operations
pub type Result<T> = std::result::Result<T, LeydenError>;

/// Main error type for Leyden
#[derive(Debug, Error)]
pub enum LeydenError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Telemetry acquisition errors
    #[error("Telemetry error: {message}")]
    Telemetry { message: String },

    /// HTTP/Web server errors
    #[error("Web server error: {message}")]
    Web { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Request for a method the bridge does not expose
    #[error("Method not implemented: {method}")]
    NotImplemented { method: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl LeydenError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        LeydenError::Config {
            message: message.into(),
        }
    }

    /// Create a new telemetry error
    pub fn telemetry<S: Into<String>>(message: S) -> Self {
        LeydenError::Telemetry {
            message: message.into(),
        }
    }

    /// Create a new web error
    pub fn web<S: Into<String>>(message: S) -> Self {
        LeydenError::Web {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        LeydenError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        LeydenError::Io {
            message: message.into(),
        }
    }

    /// Create a new not-implemented error for an unrecognized method name
    pub fn not_implemented<S: Into<String>>(method: S) -> Self {
        LeydenError::NotImplemented {
            method: method.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        LeydenError::Generic {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for LeydenError {
    fn from(err: std::io::Error) -> Self {
        LeydenError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for LeydenError {
    fn from(err: serde_yaml::Error) -> Self {
        LeydenError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LeydenError {
    fn from(err: serde_json::Error) -> Self {
        LeydenError::Serialization {
            message: err.to_string(),
        }
    }
}
