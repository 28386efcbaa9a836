//! Event id builder
//!
//! Event ids name the part that raised them and what happened:
//! `<widget>.<control>.<part>.<action>`. Building them through [`EventId`]
//! keeps string literals out of presentation and abstraction code.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ACTION_CHANGE, ACTION_FAILURE, ACTION_LOAD, ACTION_OTHER, ACTION_START, EVENT_ID_SEPARATOR,
};
use crate::error::{Error, Result};

/// What happened to the part that raised an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    /// The part finished loading
    Load,
    /// The part was started
    Start,
    /// The part's data changed
    Change,
    /// The part failed
    Failure,
    /// Anything else
    Other,
}

impl EventAction {
    /// All actions, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Load,
        Self::Start,
        Self::Change,
        Self::Failure,
        Self::Other,
    ];

    /// Suffix appended to an event id base, including the separator
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Load => ACTION_LOAD,
            Self::Start => ACTION_START,
            Self::Change => ACTION_CHANGE,
            Self::Failure => ACTION_FAILURE,
            Self::Other => ACTION_OTHER,
        }
    }

    /// Parse a suffix such as `.load`
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.suffix() == suffix)
    }
}

/// Base of an event id, to which actions are appended
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    base: String,
}

impl EventId {
    /// Use an arbitrary base string
    pub fn on(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if base.is_empty() {
            return Err(Error::missing_argument("base"));
        }
        Ok(Self { base })
    }

    /// Base for a part (presentation or abstraction) of a control in a widget
    pub fn for_part(widget: &str, control: &str, part: &str) -> Result<Self> {
        for (name, value) in [("widget", widget), ("control", control), ("part", part)] {
            if value.is_empty() {
                return Err(Error::missing_argument(name));
            }
        }
        Ok(Self {
            base: format!("{widget}{EVENT_ID_SEPARATOR}{control}{EVENT_ID_SEPARATOR}{part}"),
        })
    }

    /// The base string
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full event id for an action
    pub fn action(&self, action: EventAction) -> String {
        format!("{}{}", self.base, action.suffix())
    }

    /// `<base>.load`
    pub fn load(&self) -> String {
        self.action(EventAction::Load)
    }

    /// `<base>.start`
    pub fn start(&self) -> String {
        self.action(EventAction::Start)
    }

    /// `<base>.change`
    pub fn change(&self) -> String {
        self.action(EventAction::Change)
    }

    /// `<base>.failure`
    pub fn failure(&self) -> String {
        self.action(EventAction::Failure)
    }

    /// `<base>.other`
    pub fn other(&self) -> String {
        self.action(EventAction::Other)
    }

    /// Whether `event` was built from this base
    pub fn matches(&self, event: &str) -> bool {
        event
            .strip_prefix(self.base.as_str())
            .is_some_and(|rest| rest.starts_with(EVENT_ID_SEPARATOR))
    }

    /// Trailing action segment of an event id, separator included
    pub fn action_of(event: &str) -> Result<&str> {
        event
            .rfind(EVENT_ID_SEPARATOR)
            .map(|index| &event[index..])
            .ok_or_else(|| Error::missing_argument(format!("separator in event {event}")))
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base)
    }
}
