//! Component definitions
//!
//! A [`Definition`] is the recipe a repository follows the first time a
//! component id is requested:
//!
//! ```text
//! fixed args ──┐
//! resolved refs ├──► merged Args (+ "id") ──► target.create() ──► component
//! overrides ───┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pac_domain::{Args, Component, Definition, Result, Scope};
//!
//! struct Counter;
//! impl Component for Counter {}
//!
//! let definition = Definition::new(|_args: Args| -> Result<Arc<dyn Component>> {
//!     Ok(Arc::new(Counter))
//! })
//!     .with_arg("start", 1)
//!     .with_ref("store", "counterStore")
//!     .with_scope(Scope::Transient);
//!
//! assert!(definition.target().is_some());
//! assert_eq!(definition.refs().len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ports::ComponentFactory;
use crate::value_objects::{ArgValue, Args, Scope};

/// What a reference key resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefTarget {
    /// One component id, merged as a single component
    Single(String),
    /// Several component ids, merged as an ordered list
    List(Vec<String>),
}

impl RefTarget {
    /// Component ids this target points at, in resolution order
    pub fn ids(&self) -> &[String] {
        match self {
            Self::Single(id) => std::slice::from_ref(id),
            Self::List(ids) => ids,
        }
    }
}

impl From<&str> for RefTarget {
    fn from(id: &str) -> Self {
        Self::Single(id.to_string())
    }
}

impl From<String> for RefTarget {
    fn from(id: String) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<String>> for RefTarget {
    fn from(ids: Vec<String>) -> Self {
        Self::List(ids)
    }
}

impl From<Vec<&str>> for RefTarget {
    fn from(ids: Vec<&str>) -> Self {
        Self::List(ids.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RefTarget {
    fn from(ids: [&str; N]) -> Self {
        Self::List(ids.into_iter().map(str::to_string).collect())
    }
}

/// Registered recipe for producing a component
#[derive(Clone, Default)]
pub struct Definition {
    target: Option<Arc<dyn ComponentFactory>>,
    args: Args,
    refs: IndexMap<String, RefTarget>,
    scope: Scope,
    events: Vec<String>,
}

impl Definition {
    /// Create a singleton definition around a factory or bare function
    pub fn new<F>(factory: F) -> Self
    where
        F: ComponentFactory + 'static,
    {
        Self::from_factory(Arc::new(factory))
    }

    /// Create a definition around a shared factory
    pub fn from_factory(factory: Arc<dyn ComponentFactory>) -> Self {
        Self {
            target: Some(factory),
            ..Self::default()
        }
    }

    /// Replace the factory
    #[must_use]
    pub fn with_target<F>(mut self, factory: F) -> Self
    where
        F: ComponentFactory + 'static,
    {
        self.target = Some(Arc::new(factory));
        self
    }

    /// Add a fixed argument merged into every creation call
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Overlay a set of fixed arguments
    #[must_use]
    pub fn with_args(mut self, args: &Args) -> Self {
        self.args.overlay(args);
        self
    }

    /// Add a reference resolved through the repository before creation
    #[must_use]
    pub fn with_ref(mut self, key: impl Into<String>, target: impl Into<RefTarget>) -> Self {
        self.refs.insert(key.into(), target.into());
        self
    }

    /// Set the scope
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Subscribe the component to an event when the definition is registered
    #[must_use]
    pub fn listening_to(mut self, event: impl Into<String>) -> Self {
        self.events.push(event.into());
        self
    }

    /// The factory, if one was supplied
    pub fn target(&self) -> Option<&Arc<dyn ComponentFactory>> {
        self.target.as_ref()
    }

    /// Fixed arguments
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// References in declaration order
    pub fn refs(&self) -> &IndexMap<String, RefTarget> {
        &self.refs
    }

    /// Scope of produced components
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Events the component subscribes to on registration
    pub fn events(&self) -> &[String] {
        &self.events
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("has_target", &self.target.is_some())
            .field("args", &self.args)
            .field("refs", &self.refs)
            .field("scope", &self.scope)
            .field("events", &self.events)
            .finish()
    }
}
