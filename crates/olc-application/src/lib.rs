//! Application Layer - OSLC Link Check
//!
//! Use cases of the link validator, orchestrating the domain ports:
//!
//! - `use_cases::query_resolver` - project area, saved query and result cursor
//! - `use_cases::reference_walker` - registered URI references of a work item
//! - `use_cases::configuration_resolver` - global configuration of a link
//! - `use_cases::backlink_validator` - link index lookup and existence probe
//! - `use_cases::link_validation_service` - the whole validation pass
//! - `reporting` - in-memory reporter, counters and the operation result
//!
//! The crate depends only on `olc-domain`; remote access is injected through
//! the ports.

pub mod reporting;
pub mod use_cases;

pub use reporting::{CollectingReporter, OperationResult, ReportSummary};
pub use use_cases::*;
