//! Link Validation Service Use Case
//!
//! Runs a complete validation pass: resolve the project area and query, then
//! for every work item walk its references, resolve their configuration and
//! hand each one to the matching validator. Findings go to the reporter.
//!
//! Processing is strictly sequential. Remote failures are recovered per work
//! item or per reference; only authentication loss aborts the pass.

use std::sync::Arc;

use olc_domain::error::Result;
use olc_domain::ports::{LinkIndexProvider, ResourceProbe, ValidationReporter, WorkItemRepository};
use olc_domain::registry;
use olc_domain::value_objects::{
    CheckMode, ProbeFailurePolicy, ProjectArea, ValidationFinding, WorkItemHandle,
};
use tracing::{debug, error, warn};

use crate::reporting::{OperationResult, ReportSummary};
use crate::use_cases::{BacklinkValidator, ConfigurationResolver, ReferenceWalker, WorkItemResolver};

/// Parameters of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    /// Fully-qualified project area name
    pub project_area: String,
    /// Saved query name
    pub query: String,
    /// Comma-separated sharing target names, `None` for a personal query
    pub sharing_targets: Option<String>,
}

/// Orchestrates the validation of every work item returned by a query
pub struct LinkValidationService {
    repository: Arc<dyn WorkItemRepository>,
    resolver: WorkItemResolver,
    walker: ReferenceWalker,
    configurations: ConfigurationResolver,
    validator: BacklinkValidator,
}

impl LinkValidationService {
    /// Create the service from its ports
    pub fn new(
        repository: Arc<dyn WorkItemRepository>,
        link_index: Arc<dyn LinkIndexProvider>,
        probe: Arc<dyn ResourceProbe>,
        probe_failure_policy: ProbeFailurePolicy,
    ) -> Self {
        Self {
            resolver: WorkItemResolver::new(Arc::clone(&repository)),
            walker: ReferenceWalker::new(Arc::clone(&repository)),
            configurations: ConfigurationResolver::new(Arc::clone(&repository)),
            validator: BacklinkValidator::new(link_index, probe, probe_failure_policy),
            repository,
        }
    }

    /// Run the pass
    ///
    /// Fails before any validation work when the project area, the sharing
    /// targets or the query cannot be resolved.
    pub async fn run(
        &self,
        request: &ValidationRequest,
        reporter: &mut dyn ValidationReporter,
    ) -> Result<OperationResult> {
        let project_area = self
            .resolver
            .resolve_project_area(&request.project_area)
            .await?;

        let mut result = OperationResult::new();
        result.append(format!("Project Area: {}", project_area.name));

        let query = self
            .resolver
            .resolve_query(
                &project_area,
                &request.query,
                request.sharing_targets.as_deref(),
            )
            .await?;
        let mut work_items = self.resolver.execute(&query).await?;

        let mut summary = ReportSummary::default();
        loop {
            let work_item = match work_items.next().await {
                Ok(Some(work_item)) => work_item,
                Ok(None) => break,
                Err(e) => {
                    error!(
                        query = %query.name,
                        total = work_items.total(),
                        "Cannot load the next query result page, stopping after a partial pass ({summary}): {e}"
                    );
                    return Err(e);
                }
            };
            self.validate_work_item(&project_area, &work_item, reporter, &mut summary)
                .await?;
        }

        if summary.work_items == 0 {
            let message = format!("Query {}: No work items found to analyze.", query.name);
            warn!("{message}");
            reporter.warn(&message);
        }

        debug!("{summary}");
        result.set_summary(summary);
        result.set_success();
        Ok(result)
    }

    /// Validate every registered URI reference of one work item
    pub async fn validate_work_item(
        &self,
        project_area: &ProjectArea,
        work_item: &WorkItemHandle,
        reporter: &mut dyn ValidationReporter,
        summary: &mut ReportSummary,
    ) -> Result<()> {
        summary.work_items += 1;
        warn!("--- Checking Links for Item {}", work_item.id);

        let references = match self.walker.walk(work_item).await {
            Ok(references) => references,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                error!("Item {}: cannot resolve references: {e}", work_item.id);
                summary.errors += 1;
                return Ok(());
            }
        };
        let source_uri = self.repository.work_item_uri(work_item.id);

        for reference in &references {
            let Some(mapping) = registry::lookup(&reference.link_type_id) else {
                continue;
            };
            let message = format!(
                "Item {}: Checking LinkTypeId: {} EndPoint: {}",
                work_item.id, reference.link_type_id, reference.end_point_name
            );

            let context = match self
                .configurations
                .resolve(project_area, work_item, &reference.link_type_id)
                .await
            {
                Ok(context) => context,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    error!("{message}: configuration lookup failed: {e}");
                    summary.errors += 1;
                    continue;
                }
            };

            let (mode, outcome) = match context.configuration_uri.as_deref() {
                Some(configuration_uri) => {
                    debug!(
                        "{message}\nGlobal Configuration Uri: {configuration_uri}\nfor work item: {} link type: {}",
                        work_item.id, reference.link_type_id
                    );
                    let outcome = self
                        .validator
                        .validate_with_configuration(
                            reference,
                            &source_uri,
                            mapping,
                            configuration_uri,
                        )
                        .await?;
                    (CheckMode::GlobalConfiguration, outcome)
                }
                None => {
                    debug!(
                        "{message}\nGlobal Configuration not configured for work item: {} link type: {} ... searching Link Index...",
                        work_item.id, reference.link_type_id
                    );
                    let outcome = self
                        .validator
                        .validate_without_configuration(reference, &source_uri, mapping)
                        .await?;
                    (CheckMode::LinkIndexOnly, outcome)
                }
            };

            summary.record(&outcome);
            reporter.report(&ValidationFinding {
                mode,
                end_point: reference.end_point_name.clone(),
                configuration_uri: context.configuration_uri,
                outcome,
            });
        }
        Ok(())
    }
}
