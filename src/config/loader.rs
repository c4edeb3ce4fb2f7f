//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::schema::ForkfulConfig;
use crate::error::{ForkfulError, Result};

/// User config location: `~/.forkful/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".forkful").join("config.yml"))
}

/// Default data directory when neither a flag nor the config sets one.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("forkful")
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the user config is read when
/// present and defaults are used otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<ForkfulConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ForkfulError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => Ok(ForkfulConfig::default()),
    }
}

/// Parse a single configuration file. An empty file yields defaults.
pub fn load_config_file(path: &Path) -> Result<ForkfulConfig> {
    debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(ForkfulConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| ForkfulError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl ForkfulConfig {
    /// Resolve the data directory: `override_dir`, then config, then default.
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_data_dir)
    }
}
