//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Prefix of configuration environment variables (`OLC_HTTP__TIMEOUT_SECS`)
pub const CONFIG_ENV_PREFIX: &str = "OLC";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "olc.toml";

/// Configuration directory name under the user's config dir
pub const DEFAULT_CONFIG_DIR: &str = "olc";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level; only warnings unless `--debug` or `--trace` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "OLC_LOG";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "olc";

// ============================================================================
// HTTP
// ============================================================================

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
