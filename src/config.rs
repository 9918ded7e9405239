use crate::consts::DEFAULT_UPCOMING_LIMIT;
use serde::{Deserialize, Serialize};

/// Which optional controls a calendar variant exposes.
///
/// One core drives both the plain widget and the full manager; these flags
/// are how a host switches the extra surfaces on. Everything defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Roster filtering by name
    pub search: bool,
    /// Record editing controls
    pub edit: bool,
}

impl Capabilities {
    /// Every capability switched on
    pub const fn full() -> Self {
        Self {
            search: true,
            edit: true,
        }
    }
}

/// Host-supplied configuration for one calendar instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub capabilities: Capabilities,
    /// Entries shown in the upcoming-birthdays widget
    pub upcoming_limit: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::default(),
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}
