//! Factory port

use std::sync::Arc;

use super::Component;
use crate::error::Result;
use crate::value_objects::Args;

/// Builds a component from its merged arguments
///
/// Any `Fn(Args) -> Result<Arc<dyn Component>>` closure is a factory, so a
/// bare function can be registered without wrapping it in a named type.
pub trait ComponentFactory: Send + Sync {
    /// Create a component instance
    fn create(&self, args: Args) -> Result<Arc<dyn Component>>;
}

impl<F> ComponentFactory for F
where
    F: Fn(Args) -> Result<Arc<dyn Component>> + Send + Sync,
{
    fn create(&self, args: Args) -> Result<Arc<dyn Component>> {
        self(args)
    }
}
