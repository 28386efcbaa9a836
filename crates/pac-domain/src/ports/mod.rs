//! Ports
//!
//! Capabilities the component repository consumes without knowing the
//! concrete types behind them.

pub mod component;
pub mod factory;
pub mod listener;
pub mod transport;

pub use component::Component;
pub use factory::ComponentFactory;
pub use listener::EventListener;
pub use transport::{CompletionHandler, Transport, TransportRequest, TransportResponse};
