//! Repository options

use crate::config::{DuplicatePolicy, RepositoryConfig};

/// Behaviour switches for a repository node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// What `add_definition` does with an id that is already registered
    pub duplicate_policy: DuplicatePolicy,
}

impl RepositoryOptions {
    /// Reject duplicate definitions instead of replacing them
    pub fn strict() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }
}

impl From<&RepositoryConfig> for RepositoryOptions {
    fn from(config: &RepositoryConfig) -> Self {
        Self {
            duplicate_policy: config.duplicate_policy,
        }
    }
}
