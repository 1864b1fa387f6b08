//! Link Type Registry
//!
//! Static taxonomy of the work item link types whose backlinks live in a
//! link index. Each entry maps the repository's internal link type id to the
//! OSLC change management vocabulary term used by the link index and to the
//! category of system owning the linked artifact.
//!
//! CCM-to-CCM links inside one repository never go through the link index
//! and are therefore absent.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AFFECTS_EXECUTION_RESULT, BLOCKS_EXECUTION_RECORD, CONTRIBUTES_TO_WORK_ITEM, ELABORATED_BY,
    IMPLEMENTS_REQUIREMENT, RELATED_EXECUTION_RECORD, RELATED_REQUIREMENT, RELATED_TEST_CASE,
    RELATED_TEST_PLAN, RELATED_TEST_SCRIPT, RELATED_WORK_ITEM, TESTED_BY_TEST_CASE,
    TRACKS_REQUIREMENT, TRACKS_WORK_ITEM,
};

/// Category of the system owning a linked artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemCategory {
    /// Change and configuration management (work items)
    Ccm,
    /// Quality management (test artifacts)
    Qm,
    /// Requirements management
    Rm,
}

impl fmt::Display for SystemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ccm => write!(f, "CCM"),
            Self::Qm => write!(f, "QM"),
            Self::Rm => write!(f, "RM"),
        }
    }
}

/// Value Object: Link Type Mapping
///
/// One row of the registry. Immutable and `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTypeMapping {
    /// Repository link type id (e.g. `com.ibm.team.workitem.linktype.qm.relatedTestCase`)
    pub internal_link_type_id: &'static str,
    /// OSLC vocabulary term recorded in the link index
    pub external_vocabulary_term: &'static str,
    /// System that owns the link target
    pub target_system: SystemCategory,
}

const fn mapping(
    internal_link_type_id: &'static str,
    external_vocabulary_term: &'static str,
    target_system: SystemCategory,
) -> LinkTypeMapping {
    LinkTypeMapping {
        internal_link_type_id,
        external_vocabulary_term,
        target_system,
    }
}

/// All validated link types
///
/// Vocabulary: <http://docs.oasis-open.org/oslc-domains/cm/v3.0/cm-v3.0-part2-change-mgt-vocab.html>
pub static LINK_TYPES: [LinkTypeMapping; 13] = [
    mapping(
        RELATED_REQUIREMENT,
        "http://open-services.net/ns/cm#affectsRequirement",
        SystemCategory::Rm,
    ),
    mapping(
        AFFECTS_EXECUTION_RESULT,
        "http://open-services.net/ns/cm#affectsTestResult",
        SystemCategory::Qm,
    ),
    mapping(
        BLOCKS_EXECUTION_RECORD,
        "http://open-services.net/ns/cm#blocksTestExecutionRecord",
        SystemCategory::Qm,
    ),
    mapping(
        IMPLEMENTS_REQUIREMENT,
        "http://open-services.net/ns/cm#implementsRequirement",
        SystemCategory::Rm,
    ),
    mapping(
        RELATED_WORK_ITEM,
        "http://open-services.net/ns/cm#relatedChangeRequest",
        SystemCategory::Rm,
    ),
    mapping(
        RELATED_TEST_CASE,
        "http://open-services.net/ns/cm#relatedTestCase",
        SystemCategory::Qm,
    ),
    mapping(
        RELATED_EXECUTION_RECORD,
        "http://open-services.net/ns/cm#relatedTestExecutionRecord",
        SystemCategory::Qm,
    ),
    mapping(
        RELATED_TEST_PLAN,
        "http://open-services.net/ns/cm#relatedTestPlan",
        SystemCategory::Qm,
    ),
    mapping(
        TESTED_BY_TEST_CASE,
        "http://open-services.net/ns/cm#testedByTestCase",
        SystemCategory::Qm,
    ),
    mapping(
        TRACKS_REQUIREMENT,
        "http://open-services.net/ns/cm#tracksRequirement",
        SystemCategory::Rm,
    ),
    mapping(
        RELATED_TEST_SCRIPT,
        "http://open-services.net/ns/cm#relatedTestScript",
        SystemCategory::Qm,
    ),
    mapping(
        CONTRIBUTES_TO_WORK_ITEM,
        "http://open-services.net/ns/cm#trackedWorkItem",
        SystemCategory::Ccm,
    ),
    mapping(
        TRACKS_WORK_ITEM,
        "http://open-services.net/ns/cm#tracksWorkItem",
        SystemCategory::Ccm,
    ),
];

/// Link types whose configuration is looked up through another link type
///
/// A work item's configuration is recorded against one attribute (found in,
/// planned for) chosen by the project area's process configuration, and not
/// every work item type exposes it. The substitute is a link type whose
/// attribute is always present under the default process configuration.
pub static CONFIGURATION_SUBSTITUTES: [(&str, &str); 7] = [
    (AFFECTS_EXECUTION_RESULT, TESTED_BY_TEST_CASE),
    (BLOCKS_EXECUTION_RECORD, TESTED_BY_TEST_CASE),
    (RELATED_TEST_CASE, TESTED_BY_TEST_CASE),
    (RELATED_TEST_PLAN, TESTED_BY_TEST_CASE),
    (RELATED_TEST_SCRIPT, TESTED_BY_TEST_CASE),
    (RELATED_EXECUTION_RECORD, TESTED_BY_TEST_CASE),
    (ELABORATED_BY, IMPLEMENTS_REQUIREMENT),
];

static LINK_TYPE_INDEX: LazyLock<HashMap<&'static str, &'static LinkTypeMapping>> =
    LazyLock::new(|| {
        LINK_TYPES
            .iter()
            .map(|m| (m.internal_link_type_id, m))
            .collect()
    });

static SUBSTITUTE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CONFIGURATION_SUBSTITUTES.iter().copied().collect());

/// Look up the mapping of a repository link type
pub fn lookup(link_type_id: &str) -> Option<&'static LinkTypeMapping> {
    LINK_TYPE_INDEX.get(link_type_id).copied()
}

/// Whether references of this link type are validated at all
pub fn is_registered(link_type_id: &str) -> bool {
    LINK_TYPE_INDEX.contains_key(link_type_id)
}

/// Link type to use for the second configuration lookup, if one is defined
pub fn configuration_substitute(link_type_id: &str) -> Option<&'static str> {
    SUBSTITUTE_INDEX.get(link_type_id).copied()
}
