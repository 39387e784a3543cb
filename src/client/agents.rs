//! Agent endpoints.

use super::{normalize, ApiClient, Filter};
use crate::shared::{Agent, ClientError, Id, Property, Review};

impl ApiClient {
    /// List agents via `GET /api/agents`
    pub async fn get_agents(&self, filter: &Filter) -> Result<Vec<Agent>, ClientError> {
        self.get("/api/agents", Some(filter), normalize::AGENT_LIST)
            .await
    }

    /// Fetch one agent via `GET /api/agents/:id`
    pub async fn get_agent(&self, id: &Id) -> Result<Agent, ClientError> {
        self.get(&format!("/api/agents/{}", id), None, normalize::AGENT)
            .await
    }

    /// List an agent's reviews via `GET /api/agents/:id/reviews`
    pub async fn get_agent_reviews(&self, agent_id: &Id) -> Result<Vec<Review>, ClientError> {
        self.get(
            &format!("/api/agents/{}/reviews", agent_id),
            None,
            normalize::REVIEW_LIST,
        )
        .await
    }

    /// List an agent's properties via `GET /api/agents/:id/properties`
    pub async fn get_agent_properties(&self, agent_id: &Id) -> Result<Vec<Property>, ClientError> {
        self.get(
            &format!("/api/agents/{}/properties", agent_id),
            None,
            normalize::PROPERTY_LIST,
        )
        .await
    }

    /// Fetch the signed-in agent's own profile via `GET /api/agents/profile`
    pub async fn get_agent_profile(&self) -> Result<Agent, ClientError> {
        self.get("/api/agents/profile", None, normalize::AGENT).await
    }
}
