//! Configuration management
//!
//! Layered configuration: built-in defaults, then an optional TOML file, then
//! `OLC_`-prefixed environment variables. Command line flags are applied on
//! top by the binary.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
