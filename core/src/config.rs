//! Client configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings applied to every request a `Client` sends.
///
/// Deserializes from partial documents; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Sent as `user-agent` unless the request sets its own. Empty disables it.
    pub user_agent: String,
    /// Added to each request that does not already carry the same header.
    pub default_headers: BTreeMap<String, String>,
    /// Whole-request timeout for transports that support one.
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("route/{}", env!("CARGO_PKG_VERSION")),
            default_headers: BTreeMap::new(),
            timeout_ms: Some(30_000),
        }
    }
}
