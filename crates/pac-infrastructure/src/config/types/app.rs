//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, RepositoryConfig};

/// Complete configuration of a PAC application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,

    /// Repository behaviour
    pub repository: RepositoryConfig,
}
