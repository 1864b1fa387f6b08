//! Domain Port Interfaces
//!
//! Boundary contracts between the validator and the systems it talks to.
//! Providers implement the remote ports over REST; reporters live in the
//! application and infrastructure layers.
//!
//! ## Organization
//!
//! - **repository** - work item repository (queries, references, configurations)
//! - **link_index** - backlink index of the target systems
//! - **probe** - existence check of link targets
//! - **reporter** - sink for validation findings

/// Link index port
pub mod link_index;
/// Existence probe port
pub mod probe;
/// Finding sink port
pub mod reporter;
/// Work item repository port
pub mod repository;

pub use link_index::LinkIndexProvider;
pub use probe::ResourceProbe;
pub use reporter::ValidationReporter;
pub use repository::WorkItemRepository;
