//! Consolidated service info report.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Info payloads keyed by service name.
///
/// Built fresh on every aggregation. The payloads are opaque: each service owns
/// the shape of what it reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServicesInfo(HashMap<String, Value>);

impl ServicesInfo {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a service's payload.
    pub fn insert(&mut self, service: impl Into<String>, info: Value) {
        self.0.insert(service.into(), info);
    }

    /// Payload reported by a service.
    #[must_use]
    pub fn get(&self, service: &str) -> Option<&Value> {
        self.0.get(service)
    }

    /// Number of services in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the report is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the services in the report, in no particular order.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Consume the report into its map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }
}

impl From<HashMap<String, Value>> for ServicesInfo {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}
