//! Backlink Value Objects
//!
//! Triples recorded by a link index and the matching rules applied to them.
//!
//! Matching is exact string equality on all three fields. No URI
//! normalization happens (trailing slashes, percent-encoding, host case), so
//! a triple recorded with a differently spelled URI is reported as missing.

use serde::{Deserialize, Serialize};

use crate::constants::OSLC_CONFIG_CONTEXT_PARAM;

/// Value Object: Backlink Triple
///
/// `(source, link type, target)` as recorded by the target system's link index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BacklinkTriple {
    /// URI of the artifact asserting the link (the work item)
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    /// OSLC link type term
    #[serde(rename = "linkType")]
    pub link_type: String,
    /// URI of the linked artifact
    #[serde(rename = "targetURL")]
    pub target_url: String,
}

impl BacklinkTriple {
    /// Create a triple
    pub fn new(
        source_url: impl Into<String>,
        link_type: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            link_type: link_type.into(),
            target_url: target_url.into(),
        }
    }

    /// Exact equality on all three fields
    pub fn matches(&self, expected: &BacklinkTriple) -> bool {
        self.source_url == expected.source_url
            && self.link_type == expected.link_type
            && self.target_url == expected.target_url
    }
}

/// Link index query for one reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklinkQuery {
    /// Link target to search backlinks for
    #[serde(rename = "targetURLs")]
    pub target_urls: Vec<String>,
    /// OSLC link type terms
    #[serde(rename = "linkTypes")]
    pub link_types: Vec<String>,
    /// Global configuration, empty when the link is not configuration-governed
    ///
    /// Carries the full configuration URI, not only its path.
    #[serde(rename = "gcURL")]
    pub gc_url: String,
}

impl BacklinkQuery {
    /// Build the query for one target and link type
    pub fn new(target_url: &str, link_type: &str, gc_url: Option<&str>) -> Self {
        Self {
            target_urls: vec![target_url.to_string()],
            link_types: vec![link_type.to_string()],
            gc_url: gc_url.unwrap_or_default().to_string(),
        }
    }

    /// Target of the query
    pub fn target_url(&self) -> &str {
        self.target_urls.first().map_or("", String::as_str)
    }
}

/// URL of an existence probe, optionally inside a configuration context
///
/// The configuration URI is appended verbatim, as OSLC servers expect it.
pub fn probe_url(target_url: &str, configuration_uri: Option<&str>) -> String {
    match configuration_uri {
        Some(gc) => {
            let separator = if target_url.contains('?') { '&' } else { '?' };
            format!("{target_url}{separator}{OSLC_CONFIG_CONTEXT_PARAM}={gc}")
        }
        None => target_url.to_string(),
    }
}
