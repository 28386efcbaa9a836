//! Component arguments
//!
//! Arguments are merged from three sources before a factory runs: fixed
//! values, resolved references and caller overrides. The map keeps insertion
//! order so that merging is deterministic and observable.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ports::{Component, Transport};

/// A single argument value
#[derive(Clone)]
pub enum ArgValue {
    /// Plain data
    Value(Value),
    /// A single component, usually a resolved reference
    Component(Arc<dyn Component>),
    /// An ordered list of components from a list reference
    Components(Vec<Arc<dyn Component>>),
}

impl ArgValue {
    /// Wrap a component
    pub fn component<T: Component>(component: T) -> Self {
        Self::Component(Arc::new(component))
    }

    /// The plain value, if this is one
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The component, if this is a single component
    pub fn as_component(&self) -> Option<&Arc<dyn Component>> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }

    /// The components, if this is a list
    pub fn as_components(&self) -> Option<&[Arc<dyn Component>]> {
        match self {
            Self::Components(components) => Some(components),
            _ => None,
        }
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
            Self::Components(components) => write!(f, "Components(len={})", components.len()),
        }
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_string()))
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<Arc<dyn Component>> for ArgValue {
    fn from(component: Arc<dyn Component>) -> Self {
        Self::Component(component)
    }
}

impl From<Vec<Arc<dyn Component>>> for ArgValue {
    fn from(components: Vec<Arc<dyn Component>>) -> Self {
        Self::Components(components)
    }
}

/// Insertion-ordered argument map handed to factories
#[derive(Debug, Clone, Default)]
pub struct Args {
    entries: IndexMap<String, ArgValue>,
}

impl Args {
    /// Create an empty argument map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an argument; a later value for the same key wins
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Overlay every entry of `other` onto this map
    pub fn overlay(&mut self, other: &Args) {
        for (key, value) in other {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Look up an argument
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries.get(key)
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> Iter<'_, String, ArgValue> {
        self.entries.iter()
    }

    /// A required argument
    pub fn require(&self, key: &str) -> Result<&ArgValue> {
        self.get(key).ok_or_else(|| Error::missing_argument(key))
    }

    /// A required plain value
    pub fn value(&self, key: &str) -> Result<&Value> {
        self.require(key)?
            .as_value()
            .ok_or_else(|| Error::type_mismatch(key, "value"))
    }

    /// A required string value
    pub fn str(&self, key: &str) -> Result<&str> {
        self.value(key)?
            .as_str()
            .ok_or_else(|| Error::type_mismatch(key, "string"))
    }

    /// A required integer value
    pub fn i64(&self, key: &str) -> Result<i64> {
        self.value(key)?
            .as_i64()
            .ok_or_else(|| Error::type_mismatch(key, "integer"))
    }

    /// A required single component of concrete type `T`
    pub fn component<T: Component>(&self, key: &str) -> Result<Arc<T>> {
        let component = self
            .require(key)?
            .as_component()
            .ok_or_else(|| Error::type_mismatch(key, "component"))?;
        Arc::clone(component)
            .downcast_arc::<T>()
            .map_err(|_| Error::type_mismatch(key, std::any::type_name::<T>()))
    }

    /// A required component list whose elements are all of type `T`
    pub fn components<T: Component>(&self, key: &str) -> Result<Vec<Arc<T>>> {
        let components = self
            .require(key)?
            .as_components()
            .ok_or_else(|| Error::type_mismatch(key, "component list"))?;
        components
            .iter()
            .map(|component| {
                Arc::clone(component)
                    .downcast_arc::<T>()
                    .map_err(|_| Error::type_mismatch(key, std::any::type_name::<T>()))
            })
            .collect()
    }

    /// A required component exposing the transport capability
    pub fn transport(&self, key: &str) -> Result<Arc<dyn Transport>> {
        let component = self
            .require(key)?
            .as_component()
            .ok_or_else(|| Error::type_mismatch(key, "component"))?;
        Arc::clone(component)
            .as_transport()
            .ok_or_else(|| Error::type_mismatch(key, "transport"))
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = (&'a String, &'a ArgValue);
    type IntoIter = Iter<'a, String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}
