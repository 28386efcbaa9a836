//! # Infrastructure Layer
//!
//! Wiring that turns domain definitions into live components.
//!
//! ## Module Categories
//!
//! ### Components & Events
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Hierarchical component repository and tree-scoped event routing |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{ComponentRepository, ListenerRef, RepositoryOptions, WeakRepository};
pub use error_ext::ErrorContext;
