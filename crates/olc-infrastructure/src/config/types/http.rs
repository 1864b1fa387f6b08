//! HTTP client configuration types

use std::time::Duration;

use olc_providers::HttpClientConfig;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent, defaults to `olc/<version>`
    pub user_agent: Option<String>,

    /// Accept self-signed server certificates
    pub accept_invalid_certs: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: None,
            accept_invalid_certs: false,
        }
    }
}

impl HttpConfig {
    /// Client settings for the provider adapters
    pub fn client_config(&self) -> HttpClientConfig {
        let defaults = HttpClientConfig::with_timeout(Duration::from_secs(self.timeout_secs));
        HttpClientConfig {
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent.clone()),
            accept_invalid_certs: self.accept_invalid_certs,
            ..defaults
        }
    }
}
