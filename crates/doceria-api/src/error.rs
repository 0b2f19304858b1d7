//! Error types for the store client.

use std::fmt;

/// Errors reported by the remote stock store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Authentication failure (bad or missing API key).
    Auth { message: String },
    /// Row not found.
    NotFound { resource: String, id: String },
    /// The store rejected the row (bad request or constraint violation).
    Validation {
        field: Option<String>,
        message: String,
    },
    /// Network/connection error.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "Auth error: {}", message),
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::Validation { field, message } => match field {
                Some(f_name) => write!(f, "Validation error on {}: {}", f_name, message),
                None => write!(f, "Validation error: {}", message),
            },
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            _ => 2,
        }
    }
}

/// Top-level error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store returned an error response.
    #[error("store error: {0}")]
    Api(#[from] ApiError),

    /// Transport-level failure before a response was received.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to encode query parameters.
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
