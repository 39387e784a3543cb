//! Authentication endpoints.
//!
//! These calls go out unauthenticated; the session manager owns what
//! happens with the returned token.

use super::{normalize, ApiClient};
use crate::shared::{AuthResponse, ClientError, Credentials, Registration};
use reqwest::Method;

impl ApiClient {
    /// Exchange credentials for a token and profile via `POST /api/auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        self.send(
            Method::POST,
            "/api/auth/login",
            Some(credentials),
            normalize::RAW,
        )
        .await
    }

    /// Create an account via `POST /api/auth/register`
    ///
    /// A successful registration behaves like a login: the server issues a
    /// token alongside the new profile.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ClientError> {
        self.send(
            Method::POST,
            "/api/auth/register",
            Some(registration),
            normalize::RAW,
        )
        .await
    }
}
