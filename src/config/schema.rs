//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration (`~/.forkful/config.yml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForkfulConfig {
    /// Directory holding the persisted favorites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Output used when no verbosity flag is given.
    pub default_output: OutputMode,

    /// Settings for `forkful watch`.
    pub watch: WatchSettings,
}

/// Settings for following external changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSettings {
    /// Delay between polls of the data directory, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    500
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
}
