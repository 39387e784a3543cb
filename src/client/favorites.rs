//! Favorites endpoints.
//!
//! All three calls require a session token; the server rejects
//! unauthenticated writes with a 401. The optimistic local-set handling
//! lives in [`crate::sync`], not here.

use super::{normalize, ApiClient};
use crate::shared::{ClientError, Id, Property};
use reqwest::Method;
use serde_json::{json, Value};

impl ApiClient {
    /// Fetch the current user's favorites via `GET /api/favorites`.
    ///
    /// The server answers with the favorited properties themselves.
    pub async fn get_favorites(&self) -> Result<Vec<Property>, ClientError> {
        self.get("/api/favorites", None, normalize::FAVORITE_LIST)
            .await
    }

    /// Mark a property favorite via `POST /api/favorites`
    pub async fn add_to_favorites(&self, property_id: &Id) -> Result<Value, ClientError> {
        let body = json!({ "propertyId": property_id });
        self.send(Method::POST, "/api/favorites", Some(&body), normalize::RAW)
            .await
    }

    /// Unmark a property favorite via `DELETE /api/favorites/:id`
    pub async fn remove_from_favorites(&self, property_id: &Id) -> Result<Value, ClientError> {
        self.send::<Value, ()>(
            Method::DELETE,
            &format!("/api/favorites/{}", property_id),
            None,
            normalize::RAW,
        )
        .await
    }
}
