//! Domain Value Objects
//!
//! Immutable snapshots read from the repository and the link index, and the
//! findings produced from them.

/// Backlink triples and matching
pub mod backlink;
/// Validation outcomes and findings
pub mod outcome;
/// Work item repository snapshots
pub mod work_item;

pub use backlink::{BacklinkQuery, BacklinkTriple, probe_url};
pub use outcome::{CheckMode, ProbeFailurePolicy, ProbeStatus, ValidationFinding, ValidationOutcome};
pub use work_item::{
    ConfigurationContext, EndPoint, ProjectArea, QueryHandle, QueryPage, RawReference,
    SharingTarget, WorkItemHandle, WorkItemReference,
};
