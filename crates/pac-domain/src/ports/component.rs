//! Component port
//!
//! Every object a repository hands out is an `Arc<dyn Component>`. Callers
//! recover the concrete type with `downcast_arc`, and optional capabilities
//! (listening for events, acting as a transport) are exposed through
//! accessor methods instead of runtime type inspection.

use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

use super::{EventListener, Transport};
use crate::error::Result;

/// A component managed by a repository
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pac_domain::Component;
///
/// struct Greeting(String);
/// impl Component for Greeting {}
///
/// let component: Arc<dyn Component> = Arc::new(Greeting("hello".into()));
/// let greeting = component.downcast_arc::<Greeting>().ok().unwrap();
/// assert_eq!(greeting.0, "hello");
/// ```
pub trait Component: DowncastSync {
    /// The listener capability, for components that receive events
    fn as_listener(&self) -> Option<&dyn EventListener> {
        None
    }

    /// The transport capability, for components that send requests
    fn as_transport(self: Arc<Self>) -> Option<Arc<dyn Transport>> {
        None
    }

    /// Lifecycle hook run once when the owning widget initializes its controls
    fn initialize(&self) -> Result<()> {
        Ok(())
    }
}

impl_downcast!(sync Component);
