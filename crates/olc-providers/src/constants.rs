//! Provider Constants
//!
//! Constants specific to the HTTP adapters. Protocol values shared with the
//! domain (OSLC headers, link index path) live in `olc_domain::constants`.

// ============================================================================
// HTTP HEADER VALUES
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Accept header sent to the link index
pub const ACCEPT_RDF_XML: &str = "application/rdf+xml";

/// Accept header sent by existence probes
pub const ACCEPT_XML: &str = "application/xml";

/// Pragma header forcing the link index to skip its caches
pub const PRAGMA_NO_CACHE: &str = "no-cache";

// ============================================================================
// HTTP CLIENT DEFAULTS
// ============================================================================

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// REPOSITORY REST API
// ============================================================================

/// Project area lookup
pub const API_PROJECT_AREAS: &str = "api/project-areas";

/// Process area (project or team area) lookup
pub const API_PROCESS_AREAS: &str = "api/process-areas";

/// Saved query lookup and execution
pub const API_QUERIES: &str = "api/queries";

/// Work item references and configuration
pub const API_WORK_ITEMS: &str = "api/workitems";

/// Query scope for the logged-in user's queries
pub const QUERY_SCOPE_PERSONAL: &str = "personal";

/// Query scope for queries shared with process areas
pub const QUERY_SCOPE_SHARED: &str = "shared";
