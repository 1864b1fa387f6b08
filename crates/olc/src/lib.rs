//! # OSLC Link Check
//!
//! Validates the cross-application OSLC links of work items. For every work
//! item returned by a saved query, each link to a requirement, test artifact
//! or remote work item is checked against the link index of the application
//! owning the target: the backlink must be recorded, and the target must
//! still answer.
//!
//! ## Architecture
//!
//! - `domain` - link type registry, value objects, ports and errors
//! - `application` - query resolution and backlink validation use cases
//! - `providers` - REST adapters for the repository, link index and probe
//! - `infrastructure` - configuration, logging, console reporting, wiring
//! - [`cli`] and [`commands`] - the `olc` command line

pub mod cli;
pub mod commands;

/// Domain layer - link taxonomy, value objects and ports
pub mod domain {
    pub use olc_domain::*;
}

/// Application layer - validation use cases
pub mod application {
    pub use olc_application::*;
}

/// Provider layer - REST adapters
pub mod providers {
    pub use olc_providers::*;
}

/// Infrastructure layer - config, logging and wiring
pub mod infrastructure {
    pub use olc_infrastructure::*;
}

pub use cli::{Cli, Command, ValidateArgs};
pub use commands::run;
