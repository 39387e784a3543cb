//! Client Error Types
//!
//! Every failure in the crate surfaces as a [`ClientError`]. Callers never
//! see raw transport exceptions or untyped server bodies: the gateway
//! normalizes both into the variants below.
//!
//! # Error Categories
//!
//! - `Authentication` - credentials rejected, or the auth endpoint unreachable
//! - `Authorization` - the server refused an authenticated request
//! - `Transport` - connection failure, timeout, or a non-2xx status
//! - `UnexpectedShape` - a 2xx body that matches no recognized shape
//! - `Validation` - client-local form input failed a constraint
//! - `Storage` - the durable session store could not be read or written
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across task
//! boundaries.

use thiserror::Error;

/// Normalized error value for every fallible operation in the crate.
#[derive(Debug, Error, Clone)]
pub enum ClientError {
    /// Credentials were rejected or the auth endpoint was unreachable
    #[error("Authentication error: {message}")]
    Authentication {
        /// Human-readable error message
        message: String,
        /// Structured error body from the server, when one was parsable
        server_body: Option<serde_json::Value>,
    },

    /// The server rejected an authenticated request for insufficient privilege
    #[error("Authorization error: {message}")]
    Authorization {
        /// Human-readable error message
        message: String,
        /// Structured error body from the server, when one was parsable
        server_body: Option<serde_json::Value>,
    },

    /// Connection failure, timeout, or non-2xx response
    #[error("Transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
        /// Structured error body from the server, when one was parsable
        server_body: Option<serde_json::Value>,
    },

    /// A successful response whose body matched no recognized shape
    #[error("Unexpected response shape for '{resource}': {message}")]
    UnexpectedShape {
        /// The resource whose normalization failed
        resource: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// Client-local form input failed a constraint before any network call
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The durable session store could not be read or written
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl ClientError {
    /// Create a new authentication error
    pub fn authentication(
        message: impl Into<String>,
        server_body: Option<serde_json::Value>,
    ) -> Self {
        Self::Authentication {
            message: message.into(),
            server_body,
        }
    }

    /// Create a new authorization error
    pub fn authorization(
        message: impl Into<String>,
        server_body: Option<serde_json::Value>,
    ) -> Self {
        Self::Authorization {
            message: message.into(),
            server_body,
        }
    }

    /// Create a new transport error with no structured server body
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            server_body: None,
        }
    }

    /// Create a new unexpected-shape error
    pub fn unexpected_shape(resource: &'static str, message: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            resource,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// The structured error body the server returned, if any
    pub fn server_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Authentication { server_body, .. }
            | Self::Authorization { server_body, .. }
            | Self::Transport { server_body, .. } => server_body.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::transport("Request timed out")
        } else {
            Self::transport(format!("Network error: {}", err))
        }
    }
}
