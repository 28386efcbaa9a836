//! Repository configuration types

use crate::constants::APPLICATION_REPOSITORY_ID;
use serde::{Deserialize, Serialize};

/// What happens when a definition is registered for an id that already has one
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the previous definition silently
    #[default]
    Overwrite,
    /// Fail with `DuplicateDefinition`
    Reject,
}

/// Repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Id of the application-level root repository
    pub root_id: String,

    /// Duplicate definition handling, inherited by child repositories
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root_id: APPLICATION_REPOSITORY_ID.to_string(),
            duplicate_policy: DuplicatePolicy::Overwrite,
        }
    }
}
