//! Property listing endpoints.

use super::{normalize, ApiClient, Filter};
use crate::shared::{ClientError, Id, NewProperty, Property};
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// List properties via `GET /api/properties`.
    ///
    /// Listing is public; the filter is forwarded verbatim as query
    /// parameters.
    pub async fn get_properties(&self, filter: &Filter) -> Result<Vec<Property>, ClientError> {
        self.get("/api/properties", Some(filter), normalize::PROPERTY_LIST)
            .await
    }

    /// Fetch one property via `GET /api/properties/:id`
    pub async fn get_property(&self, id: &Id) -> Result<Property, ClientError> {
        self.get(
            &format!("/api/properties/{}", id),
            None,
            normalize::PROPERTY,
        )
        .await
    }

    /// Create a listing via `POST /api/properties` (agents only, enforced
    /// server-side)
    pub async fn create_property(&self, property: &NewProperty) -> Result<Property, ClientError> {
        self.send(
            Method::POST,
            "/api/properties",
            Some(property),
            normalize::PROPERTY,
        )
        .await
    }

    /// Update a listing via `PUT /api/properties/:id`
    pub async fn update_property(
        &self,
        id: &Id,
        property: &NewProperty,
    ) -> Result<Property, ClientError> {
        self.send(
            Method::PUT,
            &format!("/api/properties/{}", id),
            Some(property),
            normalize::PROPERTY,
        )
        .await
    }

    /// Delete a listing via `DELETE /api/properties/:id`
    pub async fn delete_property(&self, id: &Id) -> Result<Value, ClientError> {
        self.send::<Value, ()>(
            Method::DELETE,
            &format!("/api/properties/{}", id),
            None,
            normalize::RAW,
        )
        .await
    }
}
