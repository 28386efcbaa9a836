//! Tree-scoped event routing
//!
//! Each repository keeps an ordered listener list per event id. Raising an
//! event notifies the local listeners, then forwards the event to the parent
//! and to every child, skipping the node it came from. Since links are fixed
//! at construction and the tree has no cycles, every node is visited once.
//!
//! ```text
//!          root ◄──── child1 raises "ping"
//!         (L1 ✓)
//!           │ caller = root
//!           ▼
//!         child2 (L2 ✓)         child1 is never re-entered
//! ```

use std::fmt;
use std::sync::Arc;

use pac_domain::error::{Error, Result};
use pac_domain::ports::EventListener;
use pac_domain::value_objects::{EventArg, NodeId};
use tracing::trace;

use super::repository::ComponentRepository;

/// A registered listener
#[derive(Clone)]
pub enum ListenerRef {
    /// A component id, resolved through the repository when notified
    Component(String),
    /// A listener held directly
    Direct(Arc<dyn EventListener>),
}

impl ListenerRef {
    /// Refer to a listener component by id
    pub fn component(id: impl Into<String>) -> Self {
        Self::Component(id.into())
    }

    /// Hold a listener directly
    pub fn direct(listener: Arc<dyn EventListener>) -> Self {
        Self::Direct(listener)
    }

    /// Same id, or same listener object
    pub fn same_as(&self, other: &ListenerRef) -> bool {
        match (self, other) {
            (Self::Component(a), Self::Component(b)) => a == b,
            (Self::Direct(a), Self::Direct(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for ListenerRef {
    fn from(id: &str) -> Self {
        Self::Component(id.to_string())
    }
}

impl From<String> for ListenerRef {
    fn from(id: String) -> Self {
        Self::Component(id)
    }
}

impl From<Arc<dyn EventListener>> for ListenerRef {
    fn from(listener: Arc<dyn EventListener>) -> Self {
        Self::Direct(listener)
    }
}

impl fmt::Debug for ListenerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component(id) => f.debug_tuple("Component").field(id).finish(),
            Self::Direct(_) => f.write_str("Direct(..)"),
        }
    }
}

impl ComponentRepository {
    /// Append a listener for `event`; duplicates are notified once per registration
    pub fn add_event_ref(
        &self,
        event: impl Into<String>,
        listener: impl Into<ListenerRef>,
    ) -> Result<&Self> {
        let event = event.into();
        if event.is_empty() {
            return Err(Error::missing_argument("event"));
        }
        self.node
            .events
            .write()
            .entry(event)
            .or_default()
            .push(listener.into());
        Ok(self)
    }

    /// Remove every registration of `listener` for `event`
    pub fn remove_event_ref(&self, event: &str, listener: &ListenerRef) -> Result<&Self> {
        if event.is_empty() {
            return Err(Error::missing_argument("event"));
        }
        if let Some(listeners) = self.node.events.write().get_mut(event) {
            listeners.retain(|registered| !registered.same_as(listener));
        }
        Ok(self)
    }

    /// Number of local registrations for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.node.events.read().get(event).map_or(0, Vec::len)
    }

    /// Raise an event from outside the tree
    pub fn raise(&self, event: &str, arg: &EventArg) -> Result<()> {
        self.raise_event(event, None, arg)
    }

    /// Notify local listeners, then propagate to parent and children except `caller`
    ///
    /// Listeners registered by id are resolved through [`get`], so raising
    /// an event may construct them. A resolution failure aborts the raise.
    ///
    /// [`get`]: ComponentRepository::get
    pub fn raise_event(&self, event: &str, caller: Option<NodeId>, arg: &EventArg) -> Result<()> {
        if event.is_empty() {
            return Err(Error::missing_argument("event"));
        }

        let listeners = self.node.events.read().get(event).cloned();
        if let Some(listeners) = listeners {
            trace!(
                repository = %self.node.id,
                event,
                count = listeners.len(),
                "Notifying listeners"
            );
            for listener in listeners {
                self.notify(&listener, event, arg)?;
            }
        }

        let me = Some(self.node.identity);

        if let Some(parent) = self.parent()
            && Some(parent.node_id()) != caller
        {
            parent.raise_event(event, me, arg)?;
        }

        for child in self.children() {
            if Some(child.node_id()) != caller {
                child.raise_event(event, me, arg)?;
            }
        }
        Ok(())
    }

    fn notify(&self, listener: &ListenerRef, event: &str, arg: &EventArg) -> Result<()> {
        match listener {
            ListenerRef::Direct(listener) => listener.notify(event, arg),
            ListenerRef::Component(id) => {
                let component = self.get(id)?;
                let listener = component
                    .as_listener()
                    .ok_or_else(|| Error::invalid_listener(id.clone()))?;
                listener.notify(event, arg);
            }
        }
        Ok(())
    }

    /// Subscribe a component id unless it already listens to `event`
    pub(super) fn subscribe_once(&self, event: &str, id: &str) {
        let mut events = self.node.events.write();
        let listeners = events.entry(event.to_string()).or_default();
        let listener = ListenerRef::component(id);
        if !listeners.iter().any(|registered| registered.same_as(&listener)) {
            listeners.push(listener);
        }
    }

    /// Drop the subscriptions of component `id` to `event`
    pub(super) fn unsubscribe(&self, event: &str, id: &str) {
        let listener = ListenerRef::component(id);
        if let Some(listeners) = self.node.events.write().get_mut(event) {
            listeners.retain(|registered| !registered.same_as(&listener));
        }
    }
}
