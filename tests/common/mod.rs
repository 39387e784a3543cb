//! Shared helpers for integration tests.
#![allow(dead_code)]

use homesphere_client::client::{ApiClient, TokenSource};
use homesphere_client::shared::ClientConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Token source that records whether the gateway reported a rejection.
pub struct RecordingTokens {
    token: Mutex<Option<String>>,
    rejected: AtomicBool,
}

impl RecordingTokens {
    pub fn new(token: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            token: Mutex::new(token.map(str::to_owned)),
            rejected: AtomicBool::new(false),
        })
    }

    pub fn was_rejected(&self) -> bool {
        self.rejected.load(Ordering::SeqCst)
    }
}

impl TokenSource for RecordingTokens {
    fn bearer_token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn on_unauthorized(&self) {
        self.rejected.store(true, Ordering::SeqCst);
        *self.token.lock().unwrap() = None;
    }
}

pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .base_url(base_url)
        .build()
        .expect("mock server URL is valid")
}

pub fn client_with_tokens(base_url: &str, tokens: Arc<RecordingTokens>) -> ApiClient {
    ApiClient::new(test_config(base_url), tokens).expect("client builds")
}

pub fn anonymous_client(base_url: &str) -> ApiClient {
    ApiClient::anonymous(test_config(base_url)).expect("client builds")
}

/// A property record as the backend emits it.
pub fn listing_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "price": 250_000.0,
        "location": "Lagos"
    })
}

/// A user record as the auth endpoints emit it.
pub fn user_json(role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "role": role
    })
}
