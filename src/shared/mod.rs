//! Shared Module
//!
//! Types used across the client: the error taxonomy, the wire data-transfer
//! types, and the gateway configuration. Everything here is designed for
//! serialization and transmission over HTTP.

/// Shared error types
pub mod error;

/// Wire data-transfer types
pub mod types;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
pub use error::ClientError;
pub use types::{
    Agent, AuthResponse, ContactMessage, Credentials, DashboardStats, Id, NewProperty, NewReview,
    Property, Registration, Review, Role, UserProfile,
};
