//! Work Item Resolver Use Case
//!
//! Resolves the project area and the saved query named on the command line,
//! then streams the query's work items page by page.

use std::collections::VecDeque;
use std::sync::Arc;

use olc_domain::error::{Error, Result};
use olc_domain::ports::WorkItemRepository;
use olc_domain::value_objects::{ProjectArea, QueryHandle, SharingTarget, WorkItemHandle};
use tracing::{debug, warn};

/// Split a comma-separated list of sharing target names
///
/// Blank entries are dropped; names keep their inner spaces and slashes
/// (`JKE Banking (Change Management)/Business Recovery Matters`).
pub fn parse_sharing_target_names(scope: &str) -> Vec<&str> {
    scope
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Resolves queries and executes them against the repository
pub struct WorkItemResolver {
    repository: Arc<dyn WorkItemRepository>,
}

impl WorkItemResolver {
    /// Create a resolver over the given repository
    pub fn new(repository: Arc<dyn WorkItemRepository>) -> Self {
        Self { repository }
    }

    /// Resolve a project area by its fully-qualified name
    pub async fn resolve_project_area(&self, name: &str) -> Result<ProjectArea> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_argument("Project area name must be provided."));
        }
        self.repository
            .find_project_area(name)
            .await?
            .ok_or_else(|| Error::not_found(format!("Project Area not found: {name}")))
    }

    /// Resolve a saved query
    ///
    /// Without a sharing scope the logged-in user's personal queries are
    /// searched. Otherwise every named sharing target must resolve, and the
    /// queries shared with them are searched.
    pub async fn resolve_query(
        &self,
        project_area: &ProjectArea,
        query_name: &str,
        sharing_scope: Option<&str>,
    ) -> Result<QueryHandle> {
        if query_name.trim().is_empty() {
            return Err(Error::invalid_argument("Query name must be provided."));
        }

        let query = match sharing_scope {
            None => {
                self.repository
                    .find_personal_query(project_area, query_name)
                    .await?
            }
            Some(scope) => {
                let targets = self.resolve_sharing_targets(scope).await?;
                self.repository
                    .find_shared_query(project_area, &targets, query_name)
                    .await?
            }
        };

        query.ok_or_else(|| Error::not_found(format!("Query not found: {query_name}")))
    }

    async fn resolve_sharing_targets(&self, scope: &str) -> Result<Vec<SharingTarget>> {
        let names = parse_sharing_target_names(scope);
        if names.is_empty() {
            return Err(Error::invalid_argument(format!(
                "No sharing target named in query source: {scope}"
            )));
        }

        let mut targets = Vec::with_capacity(names.len());
        for name in names {
            let target = self.repository.find_process_area(name).await?.ok_or_else(|| {
                Error::not_found(format!("ProcessArea that shares the query not found: {name}"))
            })?;
            targets.push(target);
        }
        Ok(targets)
    }

    /// Execute a query, returning a lazy cursor over its work items
    ///
    /// The first page is fetched eagerly so the total result size is known.
    pub async fn execute(&self, query: &QueryHandle) -> Result<QueryResults> {
        let first = self.repository.fetch_query_page(query, None).await?;
        debug!("Query: {} result size: {}", query.name, first.total);

        Ok(QueryResults {
            repository: Arc::clone(&self.repository),
            query: query.clone(),
            total: first.total,
            buffer: first.work_items.into(),
            next_page: first.next_page,
        })
    }
}

/// Single-pass cursor over the work items of an executed query
pub struct QueryResults {
    repository: Arc<dyn WorkItemRepository>,
    query: QueryHandle,
    total: usize,
    buffer: VecDeque<WorkItemHandle>,
    next_page: Option<String>,
}

impl QueryResults {
    /// Total result size reported by the server
    pub fn total(&self) -> usize {
        self.total
    }

    /// Next work item, fetching the following page when the current one is drained
    pub async fn next(&mut self) -> Result<Option<WorkItemHandle>> {
        loop {
            if let Some(work_item) = self.buffer.pop_front() {
                return Ok(Some(work_item));
            }
            let Some(token) = self.next_page.take() else {
                return Ok(None);
            };

            let page = self
                .repository
                .fetch_query_page(&self.query, Some(&token))
                .await?;
            if page.work_items.is_empty() {
                if page.next_page.is_some() {
                    warn!(
                        query = %self.query.name,
                        "Empty result page with a continuation token, stopping"
                    );
                }
                return Ok(None);
            }
            self.buffer.extend(page.work_items);
            self.next_page = page.next_page;
        }
    }
}
