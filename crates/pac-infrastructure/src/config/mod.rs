//! Configuration management
//!
//! Loads [`AppConfig`] from defaults, an optional TOML file and `PAC_`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, DuplicatePolicy, LoggingConfig, RepositoryConfig};
