//! Work Item Repository Value Objects
//!
//! Snapshots of the repository artifacts a validation pass reads: project
//! and process areas, saved queries, work items and their link end-points.
//! None of them is ever written back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Project area resolved by its fully-qualified name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArea {
    /// Repository item UUID
    pub item_id: String,
    /// Display name
    pub name: String,
}

/// Project or team area a query is shared with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingTarget {
    /// Repository item UUID
    pub item_id: String,
    /// Fully-qualified name (e.g. `JKE Banking (Change Management)/Business Recovery Matters`)
    pub name: String,
}

/// Saved query resolved by name and scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryHandle {
    /// Repository item UUID of the query descriptor
    pub item_id: String,
    /// Query name
    pub name: String,
}

/// Work item reference returned by a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemHandle {
    /// Numeric work item id shown to users
    pub id: i64,
    /// Repository item UUID
    pub item_id: String,
}

impl fmt::Display for WorkItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// One page of query results
///
/// `total` is the size of the whole result set, independent of paging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    /// Total number of results of the query
    pub total: usize,
    /// Work items on this page
    #[serde(default)]
    pub work_items: Vec<WorkItemHandle>,
    /// Token of the following page, `None` on the last page
    #[serde(default)]
    pub next_page: Option<String>,
}

/// Raw reference stored at an end-point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReference {
    /// Link type id of the underlying link
    pub link_type_id: String,
    /// Target URI, present only for URI references
    #[serde(default)]
    pub uri: Option<String>,
    /// Item id of an item reference (non-URI)
    #[serde(default)]
    pub item_id: Option<String>,
}

impl RawReference {
    /// Whether the reference points at a URI rather than a repository item
    pub fn is_uri_reference(&self) -> bool {
        self.uri.is_some()
    }
}

/// Named slot on a work item grouping references of one link type direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndPoint {
    /// End-point descriptor id
    pub id: String,
    /// Name shown in the work item editor (e.g. "Tested By Test Case")
    pub display_name: String,
    /// Link type of every reference at this end-point
    pub link_type_id: String,
    /// References stored at this end-point
    #[serde(default)]
    pub references: Vec<RawReference>,
}

/// Value Object: Work Item Reference
///
/// URI reference of a registered link type, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemReference {
    /// Numeric id of the work item owning the link
    pub owner_work_item_id: i64,
    /// End-point descriptor id
    pub end_point_id: String,
    /// End-point display name, used in diagnostics
    pub end_point_name: String,
    /// Repository link type id
    pub link_type_id: String,
    /// Link target
    pub target_uri: String,
    /// Always true once the walker accepted the reference
    pub is_uri_reference: bool,
}

/// Configuration bound to a (work item, link type) pair
///
/// An absent `configuration_uri` means the link is not governed by a global
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationContext {
    /// Numeric work item id
    pub work_item_id: i64,
    /// Link type the configuration was looked up for
    pub link_type_id: String,
    /// Global configuration URI
    pub configuration_uri: Option<String>,
}

impl ConfigurationContext {
    /// Whether the link is checked inside a global configuration
    pub fn is_governed(&self) -> bool {
        self.configuration_uri.is_some()
    }
}
