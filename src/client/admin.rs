//! Admin dashboard endpoints.
//!
//! Admin access is enforced server-side; the client-side role check is
//! advisory only.

use super::{normalize, ApiClient, Filter};
use crate::shared::{ClientError, DashboardStats};
use serde_json::Value;

impl ApiClient {
    /// Fetch marketplace totals via `GET /api/admin/dashboard/stats`
    pub async fn get_admin_dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get("/api/admin/dashboard/stats", None, normalize::RAW)
            .await
    }

    /// List agents for moderation via `GET /api/admin/agents`.
    ///
    /// The body is passed through raw: this endpoint carries pagination
    /// metadata alongside the agent records and has no wrapper convention.
    pub async fn get_admin_agents(&self, filter: &Filter) -> Result<Value, ClientError> {
        self.get("/api/admin/agents", Some(filter), normalize::RAW)
            .await
    }
}
