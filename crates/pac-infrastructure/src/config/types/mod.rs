//! Configuration types

mod app;
mod logging;
mod repository;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use repository::{DuplicatePolicy, RepositoryConfig};
