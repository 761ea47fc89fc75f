//! Domain-specific error types for fincomu-core

use thiserror::Error;

/// Main error type for fincomu-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: missing required field '{field}'")]
    MissingField { field: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Auth error [{code}]: {message}")]
    Auth { code: String, message: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Transform error: {message}")]
    Transform { message: String },

    #[error("Contract violation: {message}")]
    Contract { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for CoreError {
    fn from(err: anyhow::Error) -> Self {
        // Keep typed errors typed when they travelled through an opaque cause.
        match err.downcast::<CoreError>() {
            Ok(core) => core,
            Err(err) => CoreError::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Decode {
            message: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for CoreError {
    fn from(err: chrono::ParseError) -> Self {
        CoreError::Decode {
            message: format!("Date parsing error: {}", err),
        }
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type alias for fincomu-core operations
pub type Result<T> = std::result::Result<T, CoreError>;
