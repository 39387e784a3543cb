//! Remote Data Gateway
//!
//! The sole path by which the client reaches the HomeSphere backend. The
//! gateway owns the HTTP client, injects the `Authorization` header,
//! normalizes response shapes, and maps every failure into a single
//! [`ClientError`] so callers never handle raw transport concerns.
//!
//! The gateway never retries: reads are idempotent and safe for callers to
//! reissue, writes must not be resent without caller intent.
//!
//! Resource methods are grouped per backend resource in the submodules;
//! all of them funnel through [`ApiClient::execute`].

use crate::shared::{ClientConfig, ClientError};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub mod admin;
pub mod agents;
pub mod auth;
pub mod contact;
pub mod favorites;
pub(crate) mod normalize;
pub mod properties;
pub mod reviews;

use normalize::Resource;

/// Read-side seam between the gateway and whoever owns the session.
///
/// The gateway reads the token exactly once per request and reports token
/// rejections back through this trait; it never mutates session state
/// itself.
pub trait TokenSource: Send + Sync {
    /// Snapshot of the bearer token at request-construction time
    fn bearer_token(&self) -> Option<String>;

    /// Called when the server rejects a request that carried a token
    fn on_unauthorized(&self);
}

/// Token source for unauthenticated use: no token, rejections ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenSource for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }

    fn on_unauthorized(&self) {}
}

/// Open filter forwarded verbatim as query parameters.
///
/// Unknown keys are passed through untouched; keys the server does not
/// support are ignored server-side.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pairs: Vec<(String, String)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query key/value pair
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// HTTP client for the HomeSphere backend API
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    /// Create a gateway reading its bearer token from `tokens`
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenSource>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            config,
            http,
            tokens,
        })
    }

    /// Create a gateway that never sends an `Authorization` header
    pub fn anonymous(config: ClientConfig) -> Result<Self, ClientError> {
        Self::new(config, Arc::new(Anonymous))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET helper used by the resource modules
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Filter>,
        resource: Resource,
    ) -> Result<T, ClientError> {
        self.execute::<T, ()>(Method::GET, path, query, None, resource)
            .await
    }

    /// Body-carrying helper used by the resource modules
    pub(crate) async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        resource: Resource,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(method, path, None, body, resource).await
    }

    /// Build, send, and normalize one request.
    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Filter>,
        body: Option<&B>,
        resource: Resource,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.api_url(path);
        // Token is read once here; the session may rotate underneath a
        // long-running request without affecting it.
        let token = self.tokens.bearer_token();

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(filter) = query {
            if !filter.is_empty() {
                request = request.query(&filter.pairs);
            }
        }
        if let Some(token) = &token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, authenticated = token.is_some(), "sending request");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(self.normalize_failure(status, &text, token.is_some()));
        }

        let raw: Value = response.json().await.map_err(|err| {
            ClientError::unexpected_shape(resource.name, format!("body is not JSON: {}", err))
        })?;
        normalize::normalize(raw, resource)
    }

    /// Map a non-2xx response into the error taxonomy.
    fn normalize_failure(
        &self,
        status: reqwest::StatusCode,
        text: &str,
        had_token: bool,
    ) -> ClientError {
        let server_body = serde_json::from_str::<Value>(text)
            .ok()
            .filter(Value::is_object);
        let message = server_body
            .as_ref()
            .and_then(|body| body.get("message").or_else(|| body.get("error")))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        match status.as_u16() {
            401 => {
                if had_token {
                    // Expired or revoked token; the session owner demotes
                    // itself rather than retrying.
                    tracing::warn!("server rejected bearer token");
                    self.tokens.on_unauthorized();
                }
                ClientError::authentication(message, server_body)
            }
            403 => ClientError::authorization(message, server_body),
            _ => ClientError::Transport {
                message,
                server_body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pairs_kept_verbatim() {
        let filter = Filter::new()
            .with("city", "Lagos")
            .with("minPrice", 250_000)
            .with("unknownKey", "kept");
        assert_eq!(filter.pairs().len(), 3);
        assert_eq!(
            filter.pairs()[2],
            ("unknownKey".to_string(), "kept".to_string())
        );
    }

    #[test]
    fn test_anonymous_token_source() {
        let anon = Anonymous;
        assert!(anon.bearer_token().is_none());
        anon.on_unauthorized();
    }

    #[test]
    fn test_failure_normalization_prefers_server_message() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:1")
            .build()
            .unwrap();
        let client = ApiClient::anonymous(config).unwrap();

        let err = client.normalize_failure(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message": "database offline"}"#,
            false,
        );
        match err {
            ClientError::Transport {
                message,
                server_body,
            } => {
                assert_eq!(message, "database offline");
                assert!(server_body.is_some());
            }
            other => panic!("Expected Transport, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_normalization_unparsable_body() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:1")
            .build()
            .unwrap();
        let client = ApiClient::anonymous(config).unwrap();

        let err =
            client.normalize_failure(reqwest::StatusCode::BAD_GATEWAY, "<html>oops</html>", false);
        match err {
            ClientError::Transport {
                message,
                server_body,
            } => {
                assert!(message.contains("502"));
                assert!(server_body.is_none());
            }
            other => panic!("Expected Transport, got {:?}", other),
        }
    }

    #[test]
    fn test_unauthenticated_401_maps_to_authentication() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:1")
            .build()
            .unwrap();
        let client = ApiClient::anonymous(config).unwrap();

        let err = client.normalize_failure(
            reqwest::StatusCode::UNAUTHORIZED,
            r#"{"error": "login required"}"#,
            false,
        );
        match err {
            ClientError::Authentication { message, .. } => {
                assert_eq!(message, "login required");
            }
            other => panic!("Expected Authentication, got {:?}", other),
        }
    }
}
