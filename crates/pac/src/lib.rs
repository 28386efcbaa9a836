//! # simple-pac
//!
//! Presentation-Abstraction-Control building blocks over a hierarchical
//! component repository.
//!
//! An [`Application`] owns the root repository. Each [`Widget`] loaded from
//! it gets a child repository holding its components and controls. Lookups
//! fall through to the parent, and events raised anywhere reach the whole
//! tree.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pac::{Application, Args, Component, Definition, Result, Widget};
//!
//! struct SearchControl;
//! impl Component for SearchControl {}
//!
//! let app = Application::create().unwrap();
//! app.define_widgets([(
//!     "search",
//!     Widget::definition(|widget: &Widget| {
//!         let control = |_: Args| -> Result<Arc<dyn Component>> { Ok(Arc::new(SearchControl)) };
//!         widget.define_controls([("searchControl", Definition::new(control))])?;
//!         Ok(())
//!     }),
//! )])
//! .unwrap();
//!
//! let search = app.widget("search").unwrap();
//! assert_eq!(search.repository().id(), "searchRepository");
//! search.initialize().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Definitions, ports, value objects and the error type
//! - `infrastructure` - Component repository, event routing, config, logging
//! - [`widget`], [`application`], [`handlers`] - Client layers on the repository

/// Domain layer - definitions, ports and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use pac_domain::*;
}

/// Infrastructure layer - repository, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use pac_infrastructure::*;
}

pub mod application;
pub mod handlers;
pub mod widget;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the repository at the crate root
pub use infrastructure::{ComponentRepository, ListenerRef, RepositoryOptions, WeakRepository};

pub use application::Application;
pub use handlers::EventHandlers;
pub use widget::{PartKind, Widget};
