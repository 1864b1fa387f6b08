//! Domain Layer - OSLC Link Check
//!
//! Core types of the link validator: the link type taxonomy, repository
//! snapshots, backlink triples, validation findings, and the ports the
//! application layer drives.
//!
//! ## Organization
//!
//! - `registry` - static link type taxonomy and configuration substitutes
//! - `value_objects` - work items, references, triples, outcomes
//! - `ports` - repository, link index, probe and reporter contracts
//! - `error` - domain error type

pub mod constants;
pub mod error;
pub mod ports;
pub mod registry;
pub mod value_objects;

pub use error::{Error, Result};
pub use registry::{LinkTypeMapping, SystemCategory};
pub use value_objects::*;
