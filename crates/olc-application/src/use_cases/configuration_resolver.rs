//! Configuration Resolver Use Case
//!
//! Decides whether a link is governed by a global configuration. The
//! configuration is recorded against the attribute the project area binds to
//! the link type; when nothing is found the lookup is repeated exactly once
//! with the substitute link type from the registry (or the same link type
//! when it has no substitute).

use std::sync::Arc;

use olc_domain::error::Result;
use olc_domain::ports::WorkItemRepository;
use olc_domain::registry;
use olc_domain::value_objects::{ConfigurationContext, ProjectArea, WorkItemHandle};
use tracing::debug;

/// Resolves the configuration context of links
pub struct ConfigurationResolver {
    repository: Arc<dyn WorkItemRepository>,
}

impl ConfigurationResolver {
    /// Create a resolver over the given repository
    pub fn new(repository: Arc<dyn WorkItemRepository>) -> Self {
        Self { repository }
    }

    /// Configuration context of a (work item, link type) pair
    pub async fn resolve(
        &self,
        project_area: &ProjectArea,
        work_item: &WorkItemHandle,
        link_type_id: &str,
    ) -> Result<ConfigurationContext> {
        let mut configuration_uri = self.lookup(project_area, work_item, link_type_id).await?;

        if configuration_uri.is_none() {
            let retry_link_type =
                registry::configuration_substitute(link_type_id).unwrap_or(link_type_id);
            debug!(
                work_item = work_item.id,
                link_type = link_type_id,
                retry_link_type,
                "No configuration recorded, retrying lookup"
            );
            configuration_uri = self.lookup(project_area, work_item, retry_link_type).await?;
        }

        let context = ConfigurationContext {
            work_item_id: work_item.id,
            link_type_id: link_type_id.to_string(),
            configuration_uri,
        };
        debug!(
            work_item = work_item.id,
            link_type = link_type_id,
            governed = context.is_governed(),
            "Configuration resolved"
        );
        Ok(context)
    }

    async fn lookup(
        &self,
        project_area: &ProjectArea,
        work_item: &WorkItemHandle,
        link_type_id: &str,
    ) -> Result<Option<String>> {
        let uri = self
            .repository
            .configuration_uri(project_area, work_item, link_type_id)
            .await?;
        Ok(uri.filter(|uri| !uri.trim().is_empty()))
    }
}
