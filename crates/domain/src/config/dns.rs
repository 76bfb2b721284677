use serde::{Deserialize, Serialize};

/// Upstream lookup tuning. The upstream servers themselves are fixed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Per-exchange timeout in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}
