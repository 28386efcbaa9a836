//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PAC component framework
#[derive(Error, Debug)]
pub enum Error {
    /// A definition was registered without a usable factory
    #[error("Invalid definition: id={id}, {message}")]
    InvalidDefinition {
        /// Id the definition was registered under
        id: String,
        /// Why the definition was rejected
        message: String,
    },

    /// No definition exists for the id anywhere up the parent chain
    #[error("Target factory not found: id={id}")]
    ComponentNotFound {
        /// The requested component id
        id: String,
    },

    /// The id is already being resolved on the current call chain
    #[error("Recursive reference found: id={id}, route={}", route.join(" -> "))]
    RecursiveReference {
        /// The id that was requested again
        id: String,
        /// Ids on the resolution stack when the cycle was detected
        route: Vec<String>,
    },

    /// A required argument is absent or empty
    #[error("Missing argument: {name}")]
    MissingArgument {
        /// Name of the missing argument
        name: String,
    },

    /// Strict registration refused a second definition for the same id
    #[error("Duplicated id: id={id}")]
    DuplicateDefinition {
        /// The duplicated component id
        id: String,
    },

    /// A component or argument is not of the requested type
    #[error("Type mismatch: id={id}, expected {expected}")]
    TypeMismatch {
        /// Component id or argument key
        id: String,
        /// Name of the expected type
        expected: String,
    },

    /// A listener registered by id resolved to a component that cannot be notified
    #[error("Component is not an event listener: id={id}")]
    InvalidListener {
        /// The listener component id
        id: String,
    },

    /// A factory failed to build its component
    #[error("Component creation failed: id={id}, {message}")]
    ComponentCreation {
        /// Id of the component being created
        id: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Repository error creation methods
impl Error {
    /// Create an invalid definition error
    pub fn invalid_definition<I: Into<String>, S: Into<String>>(id: I, message: S) -> Self {
        Self::InvalidDefinition {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a component not found error
    pub fn component_not_found<S: Into<String>>(id: S) -> Self {
        Self::ComponentNotFound { id: id.into() }
    }

    /// Create a recursive reference error carrying the active route
    pub fn recursive_reference<S: Into<String>>(id: S, route: Vec<String>) -> Self {
        Self::RecursiveReference {
            id: id.into(),
            route,
        }
    }

    /// Create a missing argument error
    pub fn missing_argument<S: Into<String>>(name: S) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Create a duplicate definition error
    pub fn duplicate_definition<S: Into<String>>(id: S) -> Self {
        Self::DuplicateDefinition { id: id.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<I: Into<String>, S: Into<String>>(id: I, expected: S) -> Self {
        Self::TypeMismatch {
            id: id.into(),
            expected: expected.into(),
        }
    }

    /// Create an invalid listener error
    pub fn invalid_listener<S: Into<String>>(id: S) -> Self {
        Self::InvalidListener { id: id.into() }
    }

    /// Create a component creation error
    pub fn component_creation<I: Into<String>, S: Into<String>>(id: I, message: S) -> Self {
        Self::ComponentCreation {
            id: id.into(),
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// The resolution route of a recursive reference, if this is one
    pub fn route(&self) -> Option<&[String]> {
        match self {
            Self::RecursiveReference { route, .. } => Some(route),
            _ => None,
        }
    }

    /// Whether this error means the component could not be located
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ComponentNotFound { .. })
    }
}
