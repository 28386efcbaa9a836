//! Component Repository - Hierarchical DI container and event router
//!
//! A [`ComponentRepository`] stores component definitions by id, builds each
//! component lazily on its first request and caches singletons. Repositories
//! form a tree: one for the application, one per loaded widget. Lookups that
//! miss locally fall through to the parent, and events raised on any node
//! reach every other node in the tree exactly once.
//!
//! ```text
//!            applicationRepository
//!              ▲        │        │
//!   get() falls│through │raise   │raise
//!              │        ▼        ▼
//!     searchRepository      settingsRepository
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use pac_domain::{Args, Component, Definition, Result};
//! use pac_infrastructure::di::ComponentRepository;
//!
//! struct Store;
//! impl Component for Store {}
//!
//! let root = ComponentRepository::create("root", None).unwrap();
//! let factory = |_: Args| -> Result<Arc<dyn Component>> { Ok(Arc::new(Store)) };
//! root.add_definition("store", Definition::new(factory)).unwrap();
//!
//! let child = ComponentRepository::create("child", Some(&root)).unwrap();
//! let store = child.get_as::<Store>("store").unwrap();
//! assert!(Arc::ptr_eq(&store, &root.get_as::<Store>("store").unwrap()));
//! ```

pub mod events;
pub mod options;
pub mod repository;
mod route;

pub use events::ListenerRef;
pub use options::RepositoryOptions;
pub use repository::{ComponentRepository, WeakRepository};
