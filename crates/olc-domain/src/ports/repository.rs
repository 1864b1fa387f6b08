//! Work Item Repository Port
//!
//! Read-only access to the ALM server's work item repository. Session
//! management is the implementation's concern; callers only see resolved
//! snapshots.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{
    EndPoint, ProjectArea, QueryHandle, QueryPage, SharingTarget, WorkItemHandle,
};

/// Work item repository client
#[async_trait]
pub trait WorkItemRepository: Send + Sync {
    /// Find a project area by its fully-qualified name
    async fn find_project_area(&self, name: &str) -> Result<Option<ProjectArea>>;

    /// Find a project or team area by its fully-qualified name
    async fn find_process_area(&self, name: &str) -> Result<Option<SharingTarget>>;

    /// Find a query owned by the logged-in user
    async fn find_personal_query(
        &self,
        project_area: &ProjectArea,
        name: &str,
    ) -> Result<Option<QueryHandle>>;

    /// Find a query shared with any of the given process areas
    async fn find_shared_query(
        &self,
        project_area: &ProjectArea,
        sharing_targets: &[SharingTarget],
        name: &str,
    ) -> Result<Option<QueryHandle>>;

    /// Fetch one page of query results, without the server-side size cap
    ///
    /// `page` is `None` for the first page and the previous page's
    /// `next_page` token afterwards.
    async fn fetch_query_page(&self, query: &QueryHandle, page: Option<&str>)
    -> Result<QueryPage>;

    /// Resolve the link end-points of a work item with their references
    async fn resolve_end_points(&self, work_item: &WorkItemHandle) -> Result<Vec<EndPoint>>;

    /// Global configuration bound to a work item for a link type
    ///
    /// Returns `None` when no configuration is recorded.
    async fn configuration_uri(
        &self,
        project_area: &ProjectArea,
        work_item: &WorkItemHandle,
        link_type_id: &str,
    ) -> Result<Option<String>>;

    /// Canonical URI of a work item, as recorded as source of its backlinks
    fn work_item_uri(&self, work_item_id: i64) -> String;
}
