//! Value Objects
//!
//! Small immutable types shared by the repository and its clients.

pub mod args;
pub mod event_id;
pub mod node_id;
pub mod scope;

pub use args::{ArgValue, Args};
pub use event_id::{EventAction, EventId};
pub use node_id::NodeId;
pub use scope::Scope;

/// Payload delivered with a raised event
pub type EventArg = serde_json::Value;
