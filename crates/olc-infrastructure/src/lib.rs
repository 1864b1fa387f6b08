//! # OSLC Link Check - Infrastructure Layer
//!
//! Cross-cutting technical concerns of the command line tool:
//!
//! | Module | Concern |
//! |--------|---------|
//! | [`config`] | Layered configuration (defaults, TOML file, environment) |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`reporting`] | Console rendering of validation findings |
//! | [`credentials`] | Password file handling |
//! | [`bootstrap`] | Composition root wiring adapters into the use cases |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error_ext;
pub mod logging;
pub mod reporting;

pub use bootstrap::build_validation_service;
pub use config::{AppConfig, ConfigLoader};
pub use reporting::ConsoleReporter;
