//! Backlink Validator Use Case
//!
//! Checks one reference against the link index of the system owning its
//! target and, when the backlink is recorded, probes the target itself.
//!
//! Both paths share the procedure; the configuration-governed path sends the
//! configuration as `gcURL` and probes with `oslc_config.context`, the other
//! path sends an empty `gcURL` and probes the bare target.

use std::sync::Arc;

use olc_domain::error::Result;
use olc_domain::ports::{LinkIndexProvider, ResourceProbe};
use olc_domain::registry::LinkTypeMapping;
use olc_domain::value_objects::{
    BacklinkQuery, BacklinkTriple, ProbeFailurePolicy, ValidationOutcome, WorkItemReference,
};
use tracing::{debug, trace, warn};

/// Validates references against link indexes and target servers
pub struct BacklinkValidator {
    link_index: Arc<dyn LinkIndexProvider>,
    probe: Arc<dyn ResourceProbe>,
    probe_failure_policy: ProbeFailurePolicy,
}

impl BacklinkValidator {
    /// Create a validator
    pub fn new(
        link_index: Arc<dyn LinkIndexProvider>,
        probe: Arc<dyn ResourceProbe>,
        probe_failure_policy: ProbeFailurePolicy,
    ) -> Self {
        Self {
            link_index,
            probe,
            probe_failure_policy,
        }
    }

    /// Validate a link governed by a global configuration
    pub async fn validate_with_configuration(
        &self,
        reference: &WorkItemReference,
        source_uri: &str,
        mapping: &LinkTypeMapping,
        configuration_uri: &str,
    ) -> Result<ValidationOutcome> {
        self.validate(reference, source_uri, mapping, Some(configuration_uri))
            .await
    }

    /// Validate a link that has no configuration context
    pub async fn validate_without_configuration(
        &self,
        reference: &WorkItemReference,
        source_uri: &str,
        mapping: &LinkTypeMapping,
    ) -> Result<ValidationOutcome> {
        self.validate(reference, source_uri, mapping, None).await
    }

    async fn validate(
        &self,
        reference: &WorkItemReference,
        source_uri: &str,
        mapping: &LinkTypeMapping,
        configuration_uri: Option<&str>,
    ) -> Result<ValidationOutcome> {
        let work_item_id = reference.owner_work_item_id;
        let expected = BacklinkTriple::new(
            source_uri,
            mapping.external_vocabulary_term,
            &reference.target_uri,
        );

        let triples = self.fetch_backlinks(&expected, configuration_uri).await?;
        debug!("LDX backlinks size: {}", triples.len());

        let Some(found) = scan_triples(&triples, &expected, work_item_id) else {
            return Ok(ValidationOutcome::MissingBacklink {
                work_item_id,
                link_type_id: reference.link_type_id.clone(),
                target_url: reference.target_uri.clone(),
            });
        };

        let target_url = found.target_url.clone();
        match self.probe.probe(&target_url, configuration_uri).await {
            Ok(status) if status.is_alive() => Ok(ValidationOutcome::Ok {
                work_item_id,
                link_type_id: reference.link_type_id.clone(),
                target_url,
            }),
            Ok(status) => {
                debug!(status = status.0, target = %target_url, "Link target did not answer 200");
                Ok(ValidationOutcome::BrokenLink {
                    work_item_id,
                    link_type_id: reference.link_type_id.clone(),
                    target_url,
                    configuration_uri: configuration_uri.map(str::to_string),
                })
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                debug!("{e}");
                Ok(self.probe_failure_outcome(reference, target_url, configuration_uri, &e))
            }
        }
    }

    async fn fetch_backlinks(
        &self,
        expected: &BacklinkTriple,
        configuration_uri: Option<&str>,
    ) -> Result<Vec<BacklinkTriple>> {
        let query = BacklinkQuery::new(
            &expected.target_url,
            &expected.link_type,
            configuration_uri,
        );
        match self.link_index.query_backlinks(&query).await {
            Ok(triples) => Ok(triples),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!(target = %expected.target_url, "Exception from LDX (REST): {e}");
                Ok(Vec::new())
            }
        }
    }

    fn probe_failure_outcome(
        &self,
        reference: &WorkItemReference,
        target_url: String,
        configuration_uri: Option<&str>,
        error: &olc_domain::Error,
    ) -> ValidationOutcome {
        let configuration_uri = configuration_uri.map(str::to_string);
        match self.probe_failure_policy {
            ProbeFailurePolicy::TreatAsUnknown => ValidationOutcome::Unverified {
                work_item_id: reference.owner_work_item_id,
                link_type_id: reference.link_type_id.clone(),
                target_url,
                configuration_uri,
                reason: error.to_string(),
            },
            ProbeFailurePolicy::TreatAsBroken => ValidationOutcome::BrokenLink {
                work_item_id: reference.owner_work_item_id,
                link_type_id: reference.link_type_id.clone(),
                target_url,
                configuration_uri,
            },
        }
    }
}

/// First exact match in response order, tracing every triple passed over
fn scan_triples<'a>(
    triples: &'a [BacklinkTriple],
    expected: &BacklinkTriple,
    work_item_id: i64,
) -> Option<&'a BacklinkTriple> {
    for triple in triples {
        if triple.matches(expected) {
            trace!(
                "Found LDX (REST) link. Work item: {} |source: {} |linkType: {} |Target: {}",
                work_item_id, triple.source_url, triple.link_type, triple.target_url
            );
            return Some(triple);
        }
        trace!(
            "Skipping LDX link with source: {} |linkType: {} |Target: {}",
            triple.source_url, triple.link_type, triple.target_url
        );
    }
    None
}
