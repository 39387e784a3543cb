//! Contact form endpoint.

use super::{normalize, ApiClient};
use crate::shared::{ClientError, ContactMessage};
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// Submit the contact form via `POST /api/contact`
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<Value, ClientError> {
        self.send(Method::POST, "/api/contact", Some(message), normalize::RAW)
            .await
    }
}
