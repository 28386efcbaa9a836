//! Event listener port

use crate::value_objects::EventArg;

/// Receives events raised through a repository tree
pub trait EventListener: Send + Sync {
    /// Handle a raised event
    fn notify(&self, event: &str, arg: &EventArg);
}
