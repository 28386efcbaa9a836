//! Component scope

use serde::{Deserialize, Serialize};

/// How long a resolved component lives in its repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// One instance per repository, created on first request and reused
    #[default]
    Singleton,
    /// A fresh instance for every request
    Transient,
}

impl Scope {
    /// Whether instances of this scope are cached
    pub fn is_cached(self) -> bool {
        matches!(self, Self::Singleton)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Transient => f.write_str("transient"),
        }
    }
}
