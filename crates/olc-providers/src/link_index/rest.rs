//! REST Link Index Provider
//!
//! Queries the link index (LDX) of the application owning a link target.
//! The index lives under the first path segment of the target URI, so one
//! provider serves every QM, RM and CCM application the repository links to.

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use olc_domain::constants::{
    LDX_LINK_TYPE_FIELD, LDX_LINKS_FIELD, LDX_SOURCE_URL_FIELD, LDX_TARGET_URL_FIELD,
    LINK_INDEX_QUERY_PATH,
};
use olc_domain::error::{Error, Result};
use olc_domain::ports::LinkIndexProvider;
use olc_domain::value_objects::{BacklinkQuery, BacklinkTriple};

use crate::constants::{ACCEPT_RDF_XML, CONTENT_TYPE_JSON, PRAGMA_NO_CACHE};
use crate::http::OslcHttpClient;
use crate::utils::HttpResponseUtils;

/// Link index query URI for a link target
///
/// `https://host:9443/qm/oslc_qm/contexts/_x/resources/TestCase/_tc` maps to
/// `https://host:9443/qm/linkIndex/query?Accept=text/json`, and so does the
/// bare application root `https://host:9443/qm`. A target without an
/// application segment (`https://host/`) has no index. The target's own
/// query string and fragment are not carried over to the index URI.
pub fn link_index_query_uri(target_url: &str) -> Option<String> {
    let url = Url::parse(target_url).ok()?;
    let host = url.host_str()?;
    let application = url.path_segments()?.next().filter(|s| !s.is_empty())?;
    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
    Some(format!(
        "{}://{host}{port}/{application}/{LINK_INDEX_QUERY_PATH}",
        url.scheme()
    ))
}

/// Triples of a link index response
///
/// A missing or non-array `links` field yields no triples. Entries lacking
/// one of the three fields are skipped.
pub fn parse_links(body: &Value) -> Vec<BacklinkTriple> {
    let Some(links) = body.get(LDX_LINKS_FIELD) else {
        warn!("LDX (REST) response has no {LDX_LINKS_FIELD} field");
        return Vec::new();
    };
    let Some(links) = links.as_array() else {
        warn!("LDX (REST) response field {LDX_LINKS_FIELD} is not an array");
        return Vec::new();
    };

    links
        .iter()
        .filter_map(|link| {
            let field = |name: &str| link.get(name).and_then(Value::as_str);
            match (
                field(LDX_SOURCE_URL_FIELD),
                field(LDX_LINK_TYPE_FIELD),
                field(LDX_TARGET_URL_FIELD),
            ) {
                (Some(source), Some(link_type), Some(target)) => {
                    Some(BacklinkTriple::new(source, link_type, target))
                }
                _ => {
                    debug!("Skipping malformed LDX link: {link}");
                    None
                }
            }
        })
        .collect()
}

fn parse_body(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Link index reached through its REST query endpoint
pub struct RestLinkIndexProvider {
    http: OslcHttpClient,
}

impl RestLinkIndexProvider {
    /// Create the provider
    pub fn new(http: OslcHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl LinkIndexProvider for RestLinkIndexProvider {
    async fn query_backlinks(&self, query: &BacklinkQuery) -> Result<Vec<BacklinkTriple>> {
        let target = query.target_url();
        let Some(uri) = link_index_query_uri(target) else {
            warn!("Target URI: {target} cannot create LDX (REST) uri");
            return Ok(Vec::new());
        };
        debug!(uri = %uri, gc = %query.gc_url, "Querying LDX (REST)");

        let request = self
            .http
            .post(&uri)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("Accept", ACCEPT_RDF_XML)
            .header("Pragma", PRAGMA_NO_CACHE)
            .json(query);
        let response = self.http.send(request, "LDX (REST) query").await?;
        let response = HttpResponseUtils::check_status(response, "LDX (REST) query").await?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::network_with_source("LDX (REST) response read failed", e))?;
        match parse_body(&text) {
            Ok(body) => Ok(parse_links(&body)),
            Err(e) => {
                warn!("LDX (REST) response is not JSON: {e}");
                Ok(Vec::new())
            }
        }
    }
}
