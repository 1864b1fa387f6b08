//! HTTP Existence Probe
//!
//! Fetches a link target as OSLC 2.0 XML and reports the status code. The
//! body is never read.

use async_trait::async_trait;
use tracing::debug;

use olc_domain::constants::{OSLC_CORE_VERSION, OSLC_CORE_VERSION_HEADER};
use olc_domain::error::Result;
use olc_domain::ports::ResourceProbe;
use olc_domain::value_objects::{ProbeStatus, probe_url};

use crate::constants::ACCEPT_XML;
use crate::http::OslcHttpClient;

/// Probe issuing authenticated GET requests
pub struct HttpResourceProbe {
    http: OslcHttpClient,
}

impl HttpResourceProbe {
    /// Create the probe
    pub fn new(http: OslcHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ResourceProbe for HttpResourceProbe {
    async fn probe(
        &self,
        target_url: &str,
        configuration_uri: Option<&str>,
    ) -> Result<ProbeStatus> {
        let url = probe_url(target_url, configuration_uri);
        let request = self
            .http
            .get(&url)
            .header("Accept", ACCEPT_XML)
            .header(OSLC_CORE_VERSION_HEADER, OSLC_CORE_VERSION);
        let response = self.http.send(request, "Probe link target").await?;
        let status = response.status().as_u16();
        debug!(url = %url, status, "Probed link target");
        Ok(ProbeStatus(status))
    }
}
