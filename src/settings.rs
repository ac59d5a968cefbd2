//! Optional per-data-directory settings.
//!
//! Read from `kwicdex.json` in the data directory. Every field has a
//! default, so the file may be absent or list only what it overrides.

use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default number of context tokens on each side of a concordance match.
pub const DEFAULT_WINDOW: usize = 25;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Minimum time between two filesystem staleness scans. Zero scans on
    /// every read.
    pub staleness_check_interval_ms: u64,
    pub default_window: usize,
    pub suggestion_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            staleness_check_interval_ms: 0,
            default_window: DEFAULT_WINDOW,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("invalid settings in {}: {e}", path.display()))
        })
    }

    pub fn staleness_check_interval(&self) -> Duration {
        Duration::from_millis(self.staleness_check_interval_ms)
    }
}
