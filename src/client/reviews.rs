//! Review endpoints.

use super::{normalize, ApiClient, Filter};
use crate::shared::{ClientError, Id, NewReview, Review};
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// List reviews via `GET /api/reviews`
    pub async fn get_reviews(&self, filter: &Filter) -> Result<Vec<Review>, ClientError> {
        self.get("/api/reviews", Some(filter), normalize::REVIEW_LIST)
            .await
    }

    /// List reviews for one property via `GET /api/reviews/property/:id`
    pub async fn get_property_reviews(&self, property_id: &Id) -> Result<Vec<Review>, ClientError> {
        self.get(
            &format!("/api/reviews/property/{}", property_id),
            None,
            normalize::REVIEW_LIST,
        )
        .await
    }

    /// Submit a review via `POST /api/reviews`
    pub async fn submit_review(&self, review: &NewReview) -> Result<Review, ClientError> {
        self.send(Method::POST, "/api/reviews", Some(review), normalize::REVIEW)
            .await
    }

    /// Like a review via `POST /api/reviews/:id/like`
    pub async fn like_review(&self, review_id: &Id) -> Result<Value, ClientError> {
        self.send::<Value, ()>(
            Method::POST,
            &format!("/api/reviews/{}/like", review_id),
            None,
            normalize::RAW,
        )
        .await
    }

    /// Dislike a review via `POST /api/reviews/:id/dislike`
    pub async fn dislike_review(&self, review_id: &Id) -> Result<Value, ClientError> {
        self.send::<Value, ()>(
            Method::POST,
            &format!("/api/reviews/{}/dislike", review_id),
            None,
            normalize::RAW,
        )
        .await
    }
}
