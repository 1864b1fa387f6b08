//! REST Work Item Repository
//!
//! Implements the `WorkItemRepository` port over the repository's JSON API.
//! Every request carries the run's basic auth credentials; a 401 anywhere is
//! returned as an authentication error.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use olc_domain::constants::WORK_ITEM_URI_SEGMENT;
use olc_domain::error::{Error, Result};
use olc_domain::ports::WorkItemRepository;
use olc_domain::value_objects::{
    EndPoint, ProjectArea, QueryHandle, QueryPage, SharingTarget, WorkItemHandle,
};

use crate::constants::{
    API_PROCESS_AREAS, API_PROJECT_AREAS, API_QUERIES, API_WORK_ITEMS, CONTENT_TYPE_JSON,
    QUERY_SCOPE_PERSONAL, QUERY_SCOPE_SHARED,
};
use crate::http::OslcHttpClient;
use crate::utils::HttpResponseUtils;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReferencesResponse {
    #[serde(default)]
    end_points: Vec<EndPoint>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigurationResponse {
    #[serde(default)]
    configuration_uri: Option<String>,
}

/// Work item repository reached through its REST API
///
/// ## Example
///
/// ```rust,no_run
/// use olc_providers::{Credentials, HttpClientConfig, OslcHttpClient, RestWorkItemRepository};
///
/// fn example() -> olc_domain::Result<()> {
///     let http = OslcHttpClient::new(
///         &HttpClientConfig::default(),
///         Credentials::new("alice", "secret"),
///     )?;
///     let repository = RestWorkItemRepository::new("https://clm.example.com/ccm", http)?;
///     assert_eq!(repository.base_url(), "https://clm.example.com/ccm");
///     Ok(())
/// }
/// ```
pub struct RestWorkItemRepository {
    base_url: String,
    http: OslcHttpClient,
}

impl RestWorkItemRepository {
    /// Create the adapter for a repository URL
    pub fn new(base_url: &str, http: OslcHttpClient) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::invalid_argument(format!("Invalid repository URL {base_url}: {e}")))?;
        Ok(Self { base_url, http })
    }

    /// Repository URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute API URL with encoded query parameters
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut url = Url::parse(&format!("{}/{path}", self.base_url))
            .map_err(|e| Error::internal(format!("Invalid API URL for {path}: {e}")))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url.into())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        operation: &str,
    ) -> Result<T> {
        debug!(url = %url, "{operation}");
        let request = self.http.get(url).header("Accept", CONTENT_TYPE_JSON);
        let response = self.http.send(request, operation).await?;
        HttpResponseUtils::check_and_parse(response, operation).await
    }
}

#[async_trait]
impl WorkItemRepository for RestWorkItemRepository {
    async fn find_project_area(&self, name: &str) -> Result<Option<ProjectArea>> {
        let url = self.endpoint(API_PROJECT_AREAS, &[("name", name)])?;
        let areas: Vec<ProjectArea> = self.get_json(&url, "Find project area").await?;
        Ok(areas.into_iter().find(|area| area.name == name))
    }

    async fn find_process_area(&self, name: &str) -> Result<Option<SharingTarget>> {
        let url = self.endpoint(API_PROCESS_AREAS, &[("name", name)])?;
        let areas: Vec<SharingTarget> = self.get_json(&url, "Find process area").await?;
        Ok(areas.into_iter().find(|area| area.name == name))
    }

    async fn find_personal_query(
        &self,
        project_area: &ProjectArea,
        name: &str,
    ) -> Result<Option<QueryHandle>> {
        let url = self.endpoint(
            API_QUERIES,
            &[
                ("projectArea", project_area.item_id.as_str()),
                ("name", name),
                ("scope", QUERY_SCOPE_PERSONAL),
            ],
        )?;
        let queries: Vec<QueryHandle> = self.get_json(&url, "Find personal query").await?;
        Ok(queries.into_iter().find(|query| query.name == name))
    }

    async fn find_shared_query(
        &self,
        project_area: &ProjectArea,
        sharing_targets: &[SharingTarget],
        name: &str,
    ) -> Result<Option<QueryHandle>> {
        let targets = sharing_targets
            .iter()
            .map(|target| target.item_id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let url = self.endpoint(
            API_QUERIES,
            &[
                ("projectArea", project_area.item_id.as_str()),
                ("name", name),
                ("scope", QUERY_SCOPE_SHARED),
                ("sharingTargets", targets.as_str()),
            ],
        )?;
        let queries: Vec<QueryHandle> = self.get_json(&url, "Find shared query").await?;
        Ok(queries.into_iter().find(|query| query.name == name))
    }

    async fn fetch_query_page(
        &self,
        query: &QueryHandle,
        page: Option<&str>,
    ) -> Result<QueryPage> {
        let path = format!("{API_QUERIES}/{}/results", query.item_id);
        let mut params = vec![("overrideLimit", "true")];
        if let Some(page) = page {
            params.push(("page", page));
        }
        let url = self.endpoint(&path, &params)?;
        self.get_json(&url, "Run query").await
    }

    async fn resolve_end_points(&self, work_item: &WorkItemHandle) -> Result<Vec<EndPoint>> {
        let url = self.endpoint(&format!("{API_WORK_ITEMS}/{}/references", work_item.id), &[])?;
        let references: ReferencesResponse =
            self.get_json(&url, "Resolve work item references").await?;
        Ok(references.end_points)
    }

    async fn configuration_uri(
        &self,
        project_area: &ProjectArea,
        work_item: &WorkItemHandle,
        link_type_id: &str,
    ) -> Result<Option<String>> {
        let url = self.endpoint(
            &format!("{API_WORK_ITEMS}/{}/configuration", work_item.item_id),
            &[("projectArea", project_area.item_id.as_str()), ("linkType", link_type_id)],
        )?;
        let operation = "Resolve work item configuration";
        debug!(url = %url, "{operation}");
        let request = self.http.get(&url).header("Accept", CONTENT_TYPE_JSON);
        let response = self.http.send(request, operation).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let configuration: ConfigurationResponse =
            HttpResponseUtils::check_and_parse(response, operation).await?;
        Ok(configuration.configuration_uri)
    }

    fn work_item_uri(&self, work_item_id: i64) -> String {
        format!("{}/{WORK_ITEM_URI_SEGMENT}/{work_item_id}", self.base_url)
    }
}
