//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{HttpConfig, LoggingConfig, ValidationConfig};

/// Root configuration of the tool
///
/// ```toml
/// [logging]
/// level = "warn"
/// json_format = false
///
/// [http]
/// timeout_secs = 30
/// accept_invalid_certs = false
///
/// [validation]
/// probe_failure = "treat-as-unknown"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Validation behaviour
    #[serde(default)]
    pub validation: ValidationConfig,
}
