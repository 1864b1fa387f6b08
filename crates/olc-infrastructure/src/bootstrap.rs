//! Composition Root
//!
//! Wires the REST adapters into the validation service. All adapters share
//! one HTTP client and therefore one connection pool and one set of
//! credentials.
//!
//! ```text
//! AppConfig + Credentials → OslcHttpClient ─┬→ RestWorkItemRepository ─┐
//!                                           ├→ RestLinkIndexProvider ──┼→ LinkValidationService
//!                                           └→ HttpResourceProbe ──────┘
//! ```

use std::sync::Arc;

use olc_application::LinkValidationService;
use olc_domain::error::Result;
use olc_providers::{
    Credentials, HttpResourceProbe, OslcHttpClient, RestLinkIndexProvider, RestWorkItemRepository,
};
use tracing::debug;

use crate::config::AppConfig;

/// Build the validation service for one repository
pub fn build_validation_service(
    config: &AppConfig,
    repository_url: &str,
    credentials: Credentials,
) -> Result<LinkValidationService> {
    debug!(
        repository = repository_url,
        user = %credentials.user,
        probe_failure = %config.validation.probe_failure,
        "Wiring validation service"
    );
    let http = OslcHttpClient::new(&config.http.client_config(), credentials)?;

    let repository = Arc::new(RestWorkItemRepository::new(repository_url, http.clone())?);
    let link_index = Arc::new(RestLinkIndexProvider::new(http.clone()));
    let probe = Arc::new(HttpResourceProbe::new(http));

    Ok(LinkValidationService::new(
        repository,
        link_index,
        probe,
        config.validation.probe_failure,
    ))
}
