//! Response Shape Normalization
//!
//! The backend is inconsistent about response envelopes: some endpoints
//! return the payload directly, others nest it under a wrapper field
//! (`{"properties": [...]}`). Each resource declares the wrapper names it
//! accepts, and every response passes through one normalization path.
//! A body that matches neither shape fails loudly instead of being guessed
//! at.

use crate::shared::ClientError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Declared normalization rules for one resource kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resource {
    /// Resource name used in error reports
    pub name: &'static str,
    /// Wrapper field names the payload may be nested under
    pub wrappers: &'static [&'static str],
}

pub(crate) const PROPERTY_LIST: Resource = Resource {
    name: "properties",
    wrappers: &["properties"],
};

pub(crate) const PROPERTY: Resource = Resource {
    name: "property",
    wrappers: &["property"],
};

/// The favorites list endpoint answers with a property collection.
pub(crate) const FAVORITE_LIST: Resource = Resource {
    name: "favorites",
    wrappers: &["properties", "favorites"],
};

pub(crate) const REVIEW_LIST: Resource = Resource {
    name: "reviews",
    wrappers: &["reviews"],
};

pub(crate) const REVIEW: Resource = Resource {
    name: "review",
    wrappers: &["review"],
};

pub(crate) const AGENT_LIST: Resource = Resource {
    name: "agents",
    wrappers: &["agents"],
};

pub(crate) const AGENT: Resource = Resource {
    name: "agent",
    wrappers: &["agent"],
};

/// Endpoints whose body is consumed as-is, with no wrapper convention.
pub(crate) const RAW: Resource = Resource {
    name: "payload",
    wrappers: &[],
};

/// Extract the payload for `resource` from a raw response body.
///
/// Wrapper fields win over the body itself when both are present, matching
/// the backend's `data.<wrapper> || data` convention.
pub(crate) fn normalize<T: DeserializeOwned>(
    body: Value,
    resource: Resource,
) -> Result<T, ClientError> {
    let inner = match &body {
        Value::Object(map) => resource
            .wrappers
            .iter()
            .find_map(|wrapper| map.get(*wrapper))
            .cloned()
            .unwrap_or(body),
        _ => body,
    };
    serde_json::from_value(inner)
        .map_err(|err| ClientError::unexpected_shape(resource.name, err.to_string()))
}
