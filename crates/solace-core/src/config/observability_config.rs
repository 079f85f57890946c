use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or `EnvFilter` directive: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit newline-delimited JSON instead of human-readable lines.
    pub json_logs: bool,
    /// Entries retained by the query log.
    pub query_log_capacity: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            query_log_capacity: defaults::DEFAULT_QUERY_LOG_CAPACITY,
        }
    }
}
