//! # OSLC Link Check - Provider Implementations
//!
//! Adapters implementing the ports defined in `olc-domain` over HTTP.
//!
//! | Port | Implementation |
//! |------|----------------|
//! | `WorkItemRepository` | [`RestWorkItemRepository`] |
//! | `LinkIndexProvider` | [`RestLinkIndexProvider`] |
//! | `ResourceProbe` | [`HttpResourceProbe`] |
//!
//! All adapters share one [`OslcHttpClient`], which carries the basic auth
//! credentials of the run.

pub use olc_domain::error::{Error, Result};
pub use olc_domain::ports::{LinkIndexProvider, ResourceProbe, WorkItemRepository};

/// Provider-specific constants
pub mod constants;

/// Shared HTTP client
pub mod http;

/// Link index adapters
pub mod link_index;

/// Existence probe adapters
pub mod probe;

/// Work item repository adapters
pub mod repository;

/// Shared utilities for provider implementations
pub mod utils;

pub use http::{Credentials, HttpClientConfig, OslcHttpClient};
pub use link_index::RestLinkIndexProvider;
pub use probe::HttpResourceProbe;
pub use repository::RestWorkItemRepository;
