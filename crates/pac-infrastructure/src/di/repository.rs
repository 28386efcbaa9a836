//! Component repository - definition storage and resolution
//!
//! Resolution of `get(id, overrides)`:
//!
//! 1. Enter `id` on the route stack, failing with `RecursiveReference` if it
//!    is already there.
//! 2. With a local definition: return the cached singleton, or merge
//!    fixed args → resolved refs → overrides (+ `id`) and call the factory.
//! 3. Without one: delegate to the parent, or fail with `ComponentNotFound`.
//! 4. Leave the route stack (guard drop), whatever the outcome.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use pac_domain::constants::ID_ARG_KEY;
use pac_domain::error::{Error, Result};
use pac_domain::ports::{Component, ComponentFactory};
use pac_domain::value_objects::{ArgValue, Args, NodeId};
use pac_domain::{Definition, RefTarget};
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use super::events::ListenerRef;
use super::options::RepositoryOptions;
use super::route::RouteStack;
use crate::config::DuplicatePolicy;

/// A definition that passed registration checks
pub(super) struct Recipe {
    target: Arc<dyn ComponentFactory>,
    definition: Definition,
}

/// Shared state of one repository node
pub(super) struct Node {
    pub(super) id: String,
    pub(super) identity: NodeId,
    pub(super) parent: Option<Weak<Node>>,
    pub(super) children: RwLock<Vec<Weak<Node>>>,
    pub(super) definitions: RwLock<IndexMap<String, Arc<Recipe>>>,
    pub(super) singletons: RwLock<HashMap<String, Arc<dyn Component>>>,
    pub(super) events: RwLock<IndexMap<String, Vec<ListenerRef>>>,
    pub(super) route: RouteStack,
    pub(super) options: RepositoryOptions,
}

/// Handle to a repository node
///
/// Cloning the handle does not create a new node; clones share tables and
/// identity. Parent and child links are non-owning: a node lives as long as
/// some handle to it does.
#[derive(Clone)]
pub struct ComponentRepository {
    pub(super) node: Arc<Node>,
}

impl ComponentRepository {
    /// Create a repository, registering it as a child of `parent`
    ///
    /// A child inherits its parent's options.
    pub fn create(id: impl Into<String>, parent: Option<&ComponentRepository>) -> Result<Self> {
        let options = parent.map(|p| p.node.options).unwrap_or_default();
        Self::with_options(id, parent, options)
    }

    /// Create a repository with explicit options
    pub fn with_options(
        id: impl Into<String>,
        parent: Option<&ComponentRepository>,
        options: RepositoryOptions,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::missing_argument("id"));
        }

        let node = Arc::new(Node {
            id,
            identity: NodeId::new(),
            parent: parent.map(|p| Arc::downgrade(&p.node)),
            children: RwLock::new(Vec::new()),
            definitions: RwLock::new(IndexMap::new()),
            singletons: RwLock::new(HashMap::new()),
            events: RwLock::new(IndexMap::new()),
            route: RouteStack::default(),
            options,
        });

        if let Some(parent) = parent {
            parent.node.children.write().push(Arc::downgrade(&node));
        }

        debug!(
            repository = %node.id,
            parent = parent.map_or("-", ComponentRepository::id),
            "Repository created"
        );
        Ok(Self { node })
    }

    /// Repository id
    pub fn id(&self) -> &str {
        &self.node.id
    }

    /// Identity token used as the caller edge in event routing
    pub fn node_id(&self) -> NodeId {
        self.node.identity
    }

    /// Options this node was created with
    pub fn options(&self) -> RepositoryOptions {
        self.node.options
    }

    /// The parent, while it is alive
    pub fn parent(&self) -> Option<ComponentRepository> {
        self.node
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|node| Self { node })
    }

    /// Live children in registration order; dropped children are pruned
    pub fn children(&self) -> Vec<ComponentRepository> {
        let mut children = self.node.children.write();
        children.retain(|child| child.strong_count() > 0);
        children
            .iter()
            .filter_map(Weak::upgrade)
            .map(|node| Self { node })
            .collect()
    }

    /// Non-owning handle, injectable as a component argument
    pub fn downgrade(&self) -> WeakRepository {
        WeakRepository {
            id: self.node.id.clone(),
            node: Arc::downgrade(&self.node),
        }
    }

    /// Whether a definition for `id` is registered on this node
    pub fn contains(&self, id: &str) -> bool {
        self.node.definitions.read().contains_key(id)
    }

    /// Ids of local definitions in registration order
    pub fn definition_ids(&self) -> Vec<String> {
        self.node.definitions.read().keys().cloned().collect()
    }

    /// Ids the calling thread is resolving on this node, outermost first
    pub fn resolving(&self) -> Vec<String> {
        self.node.route.snapshot()
    }

    /// Register a definition under `id`
    ///
    /// An existing definition is replaced unless the node rejects
    /// duplicates. A singleton already built for `id` stays cached. Events
    /// listed by the definition subscribe `id` as a listener; replacing a
    /// definition drops the subscriptions the previous one declared.
    pub fn add_definition(&self, id: impl Into<String>, definition: Definition) -> Result<&Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::missing_argument("id"));
        }
        let target = definition
            .target()
            .cloned()
            .ok_or_else(|| Error::invalid_definition(&id, "definition has no target factory"))?;
        let events = definition.events().to_vec();

        let replaced = {
            let mut definitions = self.node.definitions.write();
            if definitions.contains_key(&id)
                && self.node.options.duplicate_policy == DuplicatePolicy::Reject
            {
                return Err(Error::duplicate_definition(id));
            }
            definitions.insert(id.clone(), Arc::new(Recipe { target, definition }))
        };

        if let Some(previous) = replaced {
            debug!(repository = %self.node.id, component = %id, "Definition replaced");
            for event in previous.definition.events() {
                self.unsubscribe(event, &id);
            }
        }
        for event in &events {
            self.subscribe_once(event, &id);
        }

        debug!(repository = %self.node.id, component = %id, "Definition registered");
        Ok(self)
    }

    /// Register several definitions in iteration order
    pub fn define_definitions<I, K>(&self, definitions: I) -> Result<&Self>
    where
        I: IntoIterator<Item = (K, Definition)>,
        K: Into<String>,
    {
        for (id, definition) in definitions {
            self.add_definition(id, definition)?;
        }
        Ok(self)
    }

    /// Resolve a component
    pub fn get(&self, id: &str) -> Result<Arc<dyn Component>> {
        self.resolve(id, None)
    }

    /// Resolve a component with caller-supplied arguments
    ///
    /// Overrides win over fixed args and resolved refs. They are ignored
    /// when a cached singleton is returned.
    pub fn get_with(&self, id: &str, overrides: &Args) -> Result<Arc<dyn Component>> {
        self.resolve(id, Some(overrides))
    }

    /// Resolve a component of concrete type `T`
    pub fn get_as<T: Component>(&self, id: &str) -> Result<Arc<T>> {
        downcast(id, self.get(id)?)
    }

    /// Resolve a component of concrete type `T` with overrides
    pub fn get_as_with<T: Component>(&self, id: &str, overrides: &Args) -> Result<Arc<T>> {
        downcast(id, self.get_with(id, overrides)?)
    }

    pub(super) fn resolve(&self, id: &str, overrides: Option<&Args>) -> Result<Arc<dyn Component>> {
        if id.is_empty() {
            return Err(Error::missing_argument("id"));
        }

        let _frame = self.node.route.enter(id).inspect_err(|err| {
            warn!(repository = %self.node.id, component = %id, error = %err, "Resolution cycle");
        })?;

        let recipe = self.node.definitions.read().get(id).cloned();
        match recipe {
            Some(recipe) => self.instantiate(id, &recipe, overrides),
            None => self.delegate(id, overrides),
        }
    }

    fn instantiate(
        &self,
        id: &str,
        recipe: &Recipe,
        overrides: Option<&Args>,
    ) -> Result<Arc<dyn Component>> {
        let scope = recipe.definition.scope();
        if scope.is_cached()
            && let Some(cached) = self.node.singletons.read().get(id).cloned()
        {
            trace!(repository = %self.node.id, component = %id, "Singleton cache hit");
            return Ok(cached);
        }

        let args = self.merge_args(id, &recipe.definition, overrides)?;
        let component = recipe.target.create(args)?;
        debug!(repository = %self.node.id, component = %id, %scope, "Component created");

        if scope.is_cached() {
            let mut singletons = self.node.singletons.write();
            return Ok(Arc::clone(singletons.entry(id.to_string()).or_insert(component)));
        }
        Ok(component)
    }

    /// Fixed args, then refs in declaration order, then overrides, then `id`
    fn merge_args(
        &self,
        id: &str,
        definition: &Definition,
        overrides: Option<&Args>,
    ) -> Result<Args> {
        let mut args = definition.args().clone();

        for (key, target) in definition.refs() {
            let value = match target {
                RefTarget::Single(ref_id) => ArgValue::Component(self.resolve(ref_id, None)?),
                RefTarget::List(ref_ids) => ArgValue::Components(
                    ref_ids
                        .iter()
                        .map(|ref_id| self.resolve(ref_id, None))
                        .collect::<Result<Vec<_>>>()?,
                ),
            };
            args.insert(key.clone(), value);
        }

        if let Some(overrides) = overrides {
            args.overlay(overrides);
        }
        args.insert(ID_ARG_KEY, id);
        Ok(args)
    }

    fn delegate(&self, id: &str, overrides: Option<&Args>) -> Result<Arc<dyn Component>> {
        let Some(parent) = self.parent() else {
            return Err(Error::component_not_found(id));
        };
        trace!(
            repository = %self.node.id,
            parent = %parent.node.id,
            component = %id,
            "Delegating to parent"
        );
        parent.resolve(id, overrides)
    }
}

fn downcast<T: Component>(id: &str, component: Arc<dyn Component>) -> Result<Arc<T>> {
    component
        .downcast_arc::<T>()
        .map_err(|_| Error::type_mismatch(id, std::any::type_name::<T>()))
}

impl PartialEq for ComponentRepository {
    fn eq(&self, other: &Self) -> bool {
        self.node.identity == other.node.identity
    }
}

impl Eq for ComponentRepository {}

impl fmt::Debug for ComponentRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRepository")
            .field("id", &self.node.id)
            .field("node_id", &self.node.identity)
            .field("definitions", &self.node.definitions.read().len())
            .field("singletons", &self.node.singletons.read().len())
            .field("events", &self.node.events.read().len())
            .finish_non_exhaustive()
    }
}

/// Non-owning repository handle
///
/// Passing a repository into a component it defines would otherwise make
/// the node own itself through its singleton cache.
#[derive(Clone)]
pub struct WeakRepository {
    id: String,
    node: Weak<Node>,
}

impl WeakRepository {
    /// Id of the referenced repository
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The repository, while it is alive
    pub fn upgrade(&self) -> Option<ComponentRepository> {
        self.node.upgrade().map(|node| ComponentRepository { node })
    }

    /// The repository, or `ComponentNotFound` naming it once it is gone
    pub fn require(&self) -> Result<ComponentRepository> {
        self.upgrade()
            .ok_or_else(|| Error::component_not_found(self.id.clone()))
    }
}

impl fmt::Debug for WeakRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRepository")
            .field("id", &self.id)
            .field("alive", &(self.node.strong_count() > 0))
            .finish()
    }
}

impl Component for WeakRepository {}
