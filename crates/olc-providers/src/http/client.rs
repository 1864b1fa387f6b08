//! Authenticated HTTP client shared by the REST adapters

use std::fmt;
use std::time::Duration;

use olc_domain::error::{Error, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, ERROR_MSG_REQUEST_TIMEOUT};

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Accept self-signed server certificates
    pub accept_invalid_certs: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: format!("olc/{}", env!("CARGO_PKG_VERSION")),
            accept_invalid_certs: false,
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }
}

/// Basic auth credentials of the logged-in user
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// User id
    pub user: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Reqwest client plus the credentials of the run
#[derive(Debug, Clone)]
pub struct OslcHttpClient {
    client: Client,
    credentials: Credentials,
    timeout: Duration,
}

impl OslcHttpClient {
    /// Build the client
    pub fn new(config: &HttpClientConfig, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;
        Ok(Self::with_client(client, credentials, config.timeout))
    }

    /// Wrap an existing client
    pub fn with_client(client: Client, credentials: Credentials, timeout: Duration) -> Self {
        Self {
            client,
            credentials,
            timeout,
        }
    }

    /// Authenticated GET request
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.authenticate(self.client.get(url))
    }

    /// Authenticated POST request
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.authenticate(self.client.post(url))
    }

    /// Send a request, mapping transport failures to network errors
    pub async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network(format!(
                    "{operation}: {ERROR_MSG_REQUEST_TIMEOUT} {:?}",
                    self.timeout
                ))
            } else {
                Error::network_with_source(format!("{operation}: HTTP request failed"), e)
            }
        })
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.credentials.user, Some(&self.credentials.password))
    }
}
