//! Widgets
//!
//! A widget is a reusable unit (a search screen, a settings panel) that owns
//! a child repository named `<id>Repository`. Its parts come in two kinds:
//!
//! - **components**: general purpose, fetched with caller arguments
//! - **controls**: event coordination points, each receiving the widget
//!   repository as its `widget` argument and initialized with the widget
//!
//! Parts talk to each other, and to other widgets, through repository events.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use indexmap::IndexMap;
use pac_domain::constants::{
    ID_ARG_KEY, PARENT_REPOSITORY_ARG_KEY, REPOSITORY_ID_SUFFIX, WIDGET_ARG_KEY,
};
use pac_domain::{ArgValue, Args, Component, Definition, Error, EventArg, Result};
use pac_infrastructure::{ComponentRepository, ListenerRef, WeakRepository};
use parking_lot::RwLock;
use tracing::debug;

/// Kind of a widget part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// General purpose component
    Component,
    /// Control, initialized with the widget
    Control,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::Control => write!(f, "control"),
        }
    }
}

/// A widget and its repository
pub struct Widget {
    id: String,
    repository: ComponentRepository,
    parts: RwLock<IndexMap<String, PartKind>>,
    initialized: AtomicBool,
}

impl Widget {
    /// Create a widget whose repository is a child of `parent`
    pub fn create(id: impl Into<String>, parent: Option<&ComponentRepository>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::missing_argument("id"));
        }
        let repository_id = format!("{id}{REPOSITORY_ID_SUFFIX}");
        let repository = ComponentRepository::create(repository_id, parent)?;
        debug!(widget = %id, repository = %repository.id(), "Widget created");

        Ok(Self {
            id,
            repository,
            parts: RwLock::new(IndexMap::new()),
            initialized: AtomicBool::new(false),
        })
    }

    /// Definition that builds a widget and lets `configure` define its parts
    ///
    /// The factory reads the widget id from the merged `id` argument and the
    /// optional parent from `parentRepository`.
    pub fn definition<F>(configure: F) -> Definition
    where
        F: Fn(&Widget) -> Result<()> + Send + Sync + 'static,
    {
        Definition::new(move |args: Args| -> Result<Arc<dyn Component>> {
            let id = args.str(ID_ARG_KEY)?;
            let parent = match args.get(PARENT_REPOSITORY_ARG_KEY) {
                Some(_) => Some(
                    args.component::<WeakRepository>(PARENT_REPOSITORY_ARG_KEY)?
                        .require()?,
                ),
                None => None,
            };

            let widget = Widget::create(id, parent.as_ref())?;
            configure(&widget)?;
            Ok(Arc::new(widget))
        })
    }

    /// Widget id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The widget's own repository
    pub fn repository(&self) -> &ComponentRepository {
        &self.repository
    }

    /// Whether `initialize` has run
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Kind of the part registered under `id`
    pub fn kind_of(&self, id: &str) -> Option<PartKind> {
        self.parts.read().get(id).copied()
    }

    /// Component ids in definition order
    pub fn component_ids(&self) -> Vec<String> {
        self.ids_of(PartKind::Component)
    }

    /// Control ids in definition order
    pub fn control_ids(&self) -> Vec<String> {
        self.ids_of(PartKind::Control)
    }

    fn ids_of(&self, kind: PartKind) -> Vec<String> {
        self.parts
            .read()
            .iter()
            .filter(|(_, part)| **part == kind)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Register general purpose components
    pub fn define_components<I, K>(&self, definitions: I) -> Result<&Self>
    where
        I: IntoIterator<Item = (K, Definition)>,
        K: Into<String>,
    {
        for (id, definition) in definitions {
            self.define_part(id.into(), definition, PartKind::Component)?;
        }
        Ok(self)
    }

    /// Register controls; each one receives the widget repository as `widget`
    pub fn define_controls<I, K>(&self, definitions: I) -> Result<&Self>
    where
        I: IntoIterator<Item = (K, Definition)>,
        K: Into<String>,
    {
        for (id, definition) in definitions {
            let widget = ArgValue::component(self.repository.downgrade());
            let definition = definition.with_arg(WIDGET_ARG_KEY, widget);
            self.define_part(id.into(), definition, PartKind::Control)?;
        }
        Ok(self)
    }

    fn define_part(&self, id: String, definition: Definition, kind: PartKind) -> Result<()> {
        self.repository.add_definition(id.as_str(), definition)?;
        self.parts.write().insert(id, kind);
        Ok(())
    }

    /// Resolve a component with caller arguments
    pub fn get_component(&self, id: &str, args: &Args) -> Result<Arc<dyn Component>> {
        self.expect_kind(id, PartKind::Component)?;
        self.repository.get_with(id, args)
    }

    /// Resolve a control
    pub fn get_control(&self, id: &str) -> Result<Arc<dyn Component>> {
        self.expect_kind(id, PartKind::Control)?;
        self.repository.get(id)
    }

    /// Resolve a control of concrete type `T`
    pub fn get_control_as<T: Component>(&self, id: &str) -> Result<Arc<T>> {
        self.expect_kind(id, PartKind::Control)?;
        self.repository.get_as(id)
    }

    fn expect_kind(&self, id: &str, kind: PartKind) -> Result<()> {
        if id.is_empty() {
            return Err(Error::missing_argument("id"));
        }
        match self.kind_of(id) {
            Some(part) if part == kind => Ok(()),
            _ => Err(Error::invalid_definition(
                id,
                format!("not a {kind} of widget {}", self.id),
            )),
        }
    }

    /// Initialize every control in definition order
    ///
    /// Runs once per widget. The widget counts as initialized from the first
    /// call on, so a failing control is not retried.
    pub fn initialize(&self) -> Result<()> {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        for id in self.control_ids() {
            self.repository.get(&id)?.initialize()?;
        }
        debug!(widget = %self.id, "Widget initialized");
        Ok(())
    }

    /// Raise an event from this widget into the repository tree
    pub fn raise_event(&self, event: &str, arg: &EventArg) -> Result<()> {
        self.repository.raise(event, arg)
    }

    /// Register a listener on the widget repository
    pub fn add_event_ref(
        &self,
        event: impl Into<String>,
        listener: impl Into<ListenerRef>,
    ) -> Result<&Self> {
        self.repository.add_event_ref(event, listener)?;
        Ok(self)
    }

    /// Remove a listener from the widget repository
    pub fn remove_event_ref(&self, event: &str, listener: &ListenerRef) -> Result<&Self> {
        self.repository.remove_event_ref(event, listener)?;
        Ok(self)
    }
}

impl Component for Widget {
    fn initialize(&self) -> Result<()> {
        Widget::initialize(self)
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("id", &self.id)
            .field("repository", &self.repository.id())
            .field("parts", &*self.parts.read())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
