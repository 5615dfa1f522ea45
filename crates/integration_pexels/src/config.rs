//! Pexels configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the Pexels client
#[derive(Clone, Serialize, Deserialize)]
pub struct PexelsConfig {
    /// API key sent in the `Authorization` header
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.pexels.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

impl Default for PexelsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for PexelsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PexelsConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
