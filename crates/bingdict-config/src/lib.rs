use std::env;

use serde::{Deserialize, Serialize};

fn default_retries() -> u32 {
    2
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Transport policy for a lookup. Merged once at call time and never
/// mutated afterwards; partial overrides use struct-update syntax over
/// [`LookupConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Retry attempts after the first failed request.
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Proxy URL, e.g. `http://127.0.0.1:8118`. None routes directly.
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            timeout_ms: default_timeout_ms(),
            proxy: None,
        }
    }
}

impl LookupConfig {
    /// Defaults overridden by `BINGDICT_RETRIES`, `BINGDICT_TIMEOUT_MS`
    /// and `BINGDICT_PROXY` when set.
    pub fn from_env() -> Self {
        let retries = env::var("BINGDICT_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_retries);

        let timeout_ms = env::var("BINGDICT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_ms);

        let proxy = env::var("BINGDICT_PROXY").ok().filter(|v| !v.is_empty());

        Self {
            retries,
            timeout_ms,
            proxy,
        }
    }
}
