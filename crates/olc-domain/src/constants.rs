//! Domain layer constants
//!
//! Link type identifiers of the work item repository, OSLC protocol
//! header values and the wire field names of the link index.

// ============================================================================
// WORK ITEM LINK TYPES
// ============================================================================

/// Related requirement (RM)
pub const RELATED_REQUIREMENT: &str = "com.ibm.team.workitem.linktype.rm.relatedRequirement";

/// Affects test execution result (QM)
pub const AFFECTS_EXECUTION_RESULT: &str = "com.ibm.team.workitem.linktype.affectsExecutionResult";

/// Blocks test execution record (QM)
pub const BLOCKS_EXECUTION_RECORD: &str =
    "com.ibm.team.workitem.linktype.blocksTestExecutionRecord";

/// Implements requirement (RM)
pub const IMPLEMENTS_REQUIREMENT: &str = "com.ibm.team.workitem.linktype.implementsRequirement";

/// Related change request
pub const RELATED_WORK_ITEM: &str = "com.ibm.team.workitem.linktype.relatedworkitem.related";

/// Related test case (QM)
pub const RELATED_TEST_CASE: &str = "com.ibm.team.workitem.linktype.qm.relatedTestCase";

/// Related test execution record (QM)
pub const RELATED_EXECUTION_RECORD: &str =
    "com.ibm.team.workitem.linktype.qm.relatedExecutionRecord";

/// Related test plan (QM)
pub const RELATED_TEST_PLAN: &str = "com.ibm.team.workitem.linktype.qm.relatedTestPlan";

/// Tested by test case (QM)
pub const TESTED_BY_TEST_CASE: &str = "com.ibm.team.workitem.linktype.testedByTestCase";

/// Tracks requirement (RM)
pub const TRACKS_REQUIREMENT: &str = "com.ibm.team.workitem.linktype.rm.tracksRequirement";

/// Related test script (QM)
pub const RELATED_TEST_SCRIPT: &str = "com.ibm.team.workitem.linktype.qm.relatedTestScript";

/// Contributes to (tracked) work item in another CCM server
pub const CONTRIBUTES_TO_WORK_ITEM: &str = "com.ibm.team.workitem.linktype.trackedworkitem";

/// Tracks work item in another CCM server
pub const TRACKS_WORK_ITEM: &str = "com.ibm.team.workitem.linktype.tracksworkitem";

/// Elaborated by (RM), not validated but used for configuration lookup
pub const ELABORATED_BY: &str = "com.ibm.team.workitem.linktype.rm.elaboratedBy";

// ============================================================================
// OSLC PROTOCOL CONSTANTS
// ============================================================================

/// Header declaring the OSLC protocol version
pub const OSLC_CORE_VERSION_HEADER: &str = "OSLC-Core-Version";

/// OSLC protocol version sent with existence probes
pub const OSLC_CORE_VERSION: &str = "2.0";

/// Query parameter carrying the global configuration context
pub const OSLC_CONFIG_CONTEXT_PARAM: &str = "oslc_config.context";

/// Path segment and query appended to the application root to reach the link index
pub const LINK_INDEX_QUERY_PATH: &str = "linkIndex/query?Accept=text/json";

/// Item type segment of canonical work item URIs
pub const WORK_ITEM_URI_SEGMENT: &str = "resource/itemName/com.ibm.team.workitem.WorkItem";

// ============================================================================
// LINK INDEX WIRE FIELDS
// ============================================================================

/// Array of triples in a link index response
pub const LDX_LINKS_FIELD: &str = "links";

/// Source URL field of a triple
pub const LDX_SOURCE_URL_FIELD: &str = "sourceURL";

/// Link type field of a triple
pub const LDX_LINK_TYPE_FIELD: &str = "linkType";

/// Target URL field of a triple
pub const LDX_TARGET_URL_FIELD: &str = "targetURL";
