//! Event handler tables
//!
//! [`EventHandlers`] maps event ids to closures and acts as a single
//! listener for all of them. Build the table, wrap it in an `Arc`, then
//! [`subscribe`](EventHandlers::subscribe) it to a repository.
//!
//! ```
//! use std::sync::Arc;
//! use pac::{ComponentRepository, EventHandlers, EventId};
//! use serde_json::json;
//!
//! let search = EventId::for_part("search", "box", "query").unwrap();
//! let handlers = Arc::new(
//!     EventHandlers::new()
//!         .on(search.change(), |arg| assert_eq!(arg["text"], "rust"))
//!         .on(search.failure(), |_| {}),
//! );
//!
//! let repository = ComponentRepository::create("searchRepository", None).unwrap();
//! handlers.subscribe(&repository).unwrap();
//! repository.raise(&search.change(), &json!({"text": "rust"})).unwrap();
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use pac_domain::{Component, EventAction, EventArg, EventId, EventListener, Result};
use pac_infrastructure::{ComponentRepository, ListenerRef};
use tracing::trace;

/// Handler for one event id
pub type Handler = Box<dyn Fn(&EventArg) + Send + Sync>;

/// Handler for events without a dedicated entry
pub type FallbackHandler = Box<dyn Fn(&str, &EventArg) + Send + Sync>;

/// Per-event handler table
#[derive(Default)]
pub struct EventHandlers {
    handlers: IndexMap<String, Handler>,
    fallback: Option<FallbackHandler>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle `event`; a later handler for the same id replaces the earlier one
    #[must_use]
    pub fn on<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&EventArg) + Send + Sync + 'static,
    {
        self.handlers.insert(event.into(), Box::new(handler));
        self
    }

    /// Handle one action of a structured event id
    #[must_use]
    pub fn on_action<F>(self, id: &EventId, action: EventAction, handler: F) -> Self
    where
        F: Fn(&EventArg) + Send + Sync + 'static,
    {
        self.on(id.action(action), handler)
    }

    /// Handle any delivered event that has no dedicated entry
    #[must_use]
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &EventArg) + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Event ids with a dedicated handler, in registration order
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Whether `event` has a dedicated handler
    pub fn handles(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    /// Register this table on `repository` for every handled event id
    pub fn subscribe(self: &Arc<Self>, repository: &ComponentRepository) -> Result<()> {
        let listener = self.listener_ref();
        for event in self.events() {
            repository.add_event_ref(event, listener.clone())?;
        }
        Ok(())
    }

    /// Remove this table from `repository` for every handled event id
    pub fn unsubscribe(self: &Arc<Self>, repository: &ComponentRepository) -> Result<()> {
        let listener = self.listener_ref();
        for event in self.events() {
            repository.remove_event_ref(event, &listener)?;
        }
        Ok(())
    }

    fn listener_ref(self: &Arc<Self>) -> ListenerRef {
        let listener: Arc<dyn EventListener> = self.clone();
        ListenerRef::direct(listener)
    }
}

impl EventListener for EventHandlers {
    fn notify(&self, event: &str, arg: &EventArg) {
        if let Some(handler) = self.handlers.get(event) {
            handler(arg);
        } else if let Some(fallback) = &self.fallback {
            fallback(event, arg);
        } else {
            trace!(event, "No handler for event");
        }
    }
}

impl Component for EventHandlers {
    fn as_listener(&self) -> Option<&dyn EventListener> {
        Some(self)
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("events", &self.handlers.keys().collect::<Vec<_>>())
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}
