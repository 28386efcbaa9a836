//! Infrastructure constants

// ============================================================================
// Configuration
// ============================================================================

/// Prefix of environment variables that override configuration
pub const CONFIG_ENV_PREFIX: &str = "PAC";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration file looked up when no explicit path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "pac.toml";

/// Directory holding the configuration file under config/home dirs
pub const DEFAULT_CONFIG_DIR: &str = "pac";

// ============================================================================
// Logging
// ============================================================================

/// Environment variable whose filter overrides the configured level
pub const LOG_FILTER_ENV: &str = "PAC_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix for rolling log files
pub const DEFAULT_LOG_FILE_PREFIX: &str = "pac";

// ============================================================================
// Repository
// ============================================================================

/// Id of the application-level root repository
pub const APPLICATION_REPOSITORY_ID: &str = "applicationRepository";
