//! Application
//!
//! The application owns the root repository. Widgets are registered there as
//! plain definitions and loaded on demand, each with the root as the parent
//! of its own repository.

use std::sync::Arc;

use pac_domain::constants::PARENT_REPOSITORY_ARG_KEY;
use pac_domain::{ArgValue, Args, Definition, EventArg, Result};
use pac_infrastructure::config::{AppConfig, RepositoryConfig};
use pac_infrastructure::{ComponentRepository, ListenerRef, RepositoryOptions};
use tracing::info;

use crate::widget::Widget;

/// Root of a widget tree
#[derive(Debug, Clone)]
pub struct Application {
    repository: ComponentRepository,
}

impl Application {
    /// Create an application with the default repository settings
    pub fn create() -> Result<Self> {
        Self::with_repository_config(&RepositoryConfig::default())
    }

    /// Create an application from a loaded configuration
    pub fn with_config(config: &AppConfig) -> Result<Self> {
        Self::with_repository_config(&config.repository)
    }

    /// Create an application from repository settings
    pub fn with_repository_config(config: &RepositoryConfig) -> Result<Self> {
        let repository = ComponentRepository::with_options(
            config.root_id.clone(),
            None,
            RepositoryOptions::from(config),
        )?;
        info!(
            repository = %repository.id(),
            duplicate_policy = ?config.duplicate_policy,
            "Application created"
        );
        Ok(Self { repository })
    }

    /// The root repository
    pub fn repository(&self) -> &ComponentRepository {
        &self.repository
    }

    /// Register widget definitions, usually built with [`Widget::definition`]
    pub fn define_widgets<I, K>(&self, widgets: I) -> Result<&Self>
    where
        I: IntoIterator<Item = (K, Definition)>,
        K: Into<String>,
    {
        self.repository.define_definitions(widgets)?;
        Ok(self)
    }

    /// Register application-wide components shared by every widget
    pub fn define_components<I, K>(&self, definitions: I) -> Result<&Self>
    where
        I: IntoIterator<Item = (K, Definition)>,
        K: Into<String>,
    {
        self.repository.define_definitions(definitions)?;
        Ok(self)
    }

    /// Load a widget, building it on first request
    pub fn widget(&self, id: &str) -> Result<Arc<Widget>> {
        let args = Args::new().with(
            PARENT_REPOSITORY_ARG_KEY,
            ArgValue::component(self.repository.downgrade()),
        );
        self.repository.get_as_with::<Widget>(id, &args)
    }

    /// Raise an event on the root repository
    pub fn raise_event(&self, event: &str, arg: &EventArg) -> Result<()> {
        self.repository.raise(event, arg)
    }

    /// Register a listener on the root repository
    pub fn add_event_ref(
        &self,
        event: impl Into<String>,
        listener: impl Into<ListenerRef>,
    ) -> Result<&Self> {
        self.repository.add_event_ref(event, listener)?;
        Ok(self)
    }
}
