//! Reference Walker Use Case
//!
//! Enumerates the link end-points of a work item and keeps the URI
//! references whose link type is registered. Everything else is logged and
//! dropped before any remote call is made for it.

use std::sync::Arc;

use olc_domain::error::Result;
use olc_domain::ports::WorkItemRepository;
use olc_domain::registry;
use olc_domain::value_objects::{EndPoint, WorkItemHandle, WorkItemReference};
use tracing::{debug, trace};

/// Walks the references of work items
pub struct ReferenceWalker {
    repository: Arc<dyn WorkItemRepository>,
}

impl ReferenceWalker {
    /// Create a walker over the given repository
    pub fn new(repository: Arc<dyn WorkItemRepository>) -> Self {
        Self { repository }
    }

    /// Registered URI references of a work item, in end-point order
    pub async fn walk(&self, work_item: &WorkItemHandle) -> Result<Vec<WorkItemReference>> {
        let end_points = self.repository.resolve_end_points(work_item).await?;
        Ok(collect_references(work_item, &end_points))
    }
}

/// Filter resolved end-points down to validatable references
pub fn collect_references(
    work_item: &WorkItemHandle,
    end_points: &[EndPoint],
) -> Vec<WorkItemReference> {
    if end_points.is_empty() {
        debug!("Item {}: No links for work item.", work_item.id);
    }

    let mut references = Vec::new();
    for end_point in end_points {
        if end_point.references.is_empty() {
            debug!(
                "Item {}: No links for end point: {}",
                work_item.id, end_point.display_name
            );
        }

        for reference in &end_point.references {
            let Some(uri) = reference.uri.as_deref() else {
                trace!(
                    "Skipping reference with non-URI link type: {}... {}",
                    reference.link_type_id,
                    reference.item_id.as_deref().unwrap_or("[no item id]")
                );
                continue;
            };

            if !registry::is_registered(&end_point.link_type_id) {
                trace!(
                    "Skipping reference with excluded link type: {}... {}",
                    reference.link_type_id, uri
                );
                continue;
            }

            references.push(WorkItemReference {
                owner_work_item_id: work_item.id,
                end_point_id: end_point.id.clone(),
                end_point_name: end_point.display_name.clone(),
                link_type_id: end_point.link_type_id.clone(),
                target_uri: uri.to_string(),
                is_uri_reference: true,
            });
        }
    }
    references
}
