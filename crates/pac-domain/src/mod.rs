//! # Domain Layer
//!
//! Core types of the PAC (Presentation-Abstraction-Control) client framework.
//!
//! This crate holds everything the component repository and its clients agree
//! on, without any wiring or I/O:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Well-known argument keys and event action suffixes |
//! | [`definition`] | Component recipes: factory, fixed args, refs, scope |
//! | [`ports`] | Capabilities consumed by the repository (factory, listener, transport) |
//! | [`value_objects`] | Scope, argument maps, event ids, node identity |

pub mod constants;
pub mod definition;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use definition::{Definition, RefTarget};
pub use error::{Error, Result};
pub use ports::{Component, ComponentFactory, EventListener, Transport};
pub use value_objects::{ArgValue, Args, EventAction, EventArg, EventId, NodeId, Scope};
