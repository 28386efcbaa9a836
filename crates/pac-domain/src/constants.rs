//! Domain constants

/// Argument key under which the resolved component id is always merged
pub const ID_ARG_KEY: &str = "id";

/// Argument key carrying the enclosing widget repository into controls
pub const WIDGET_ARG_KEY: &str = "widget";

/// Argument key carrying the parent repository into widget factories
pub const PARENT_REPOSITORY_ARG_KEY: &str = "parentRepository";

/// Suffix appended to a widget id to name its repository
pub const REPOSITORY_ID_SUFFIX: &str = "Repository";

/// Separator between event id segments
pub const EVENT_ID_SEPARATOR: char = '.';

/// Event action raised when a part is loaded
pub const ACTION_LOAD: &str = ".load";

/// Event action raised when a part is started
pub const ACTION_START: &str = ".start";

/// Event action raised when a part changes
pub const ACTION_CHANGE: &str = ".change";

/// Event action raised when a part fails
pub const ACTION_FAILURE: &str = ".failure";

/// Event action for anything else
pub const ACTION_OTHER: &str = ".other";

/// HTTP status treated as success by the default transport check
pub const HTTP_STATUS_OK: u16 = 200;

/// Status reported by headless transports that never reach a server
pub const HTTP_STATUS_LOCAL: u16 = 0;
