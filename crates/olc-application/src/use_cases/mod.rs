//! Validation use cases

pub mod backlink_validator;
pub mod configuration_resolver;
pub mod link_validation_service;
pub mod query_resolver;
pub mod reference_walker;

pub use backlink_validator::BacklinkValidator;
pub use configuration_resolver::ConfigurationResolver;
pub use link_validation_service::{LinkValidationService, ValidationRequest};
pub use query_resolver::{QueryResults, WorkItemResolver, parse_sharing_target_names};
pub use reference_walker::{ReferenceWalker, collect_references};
