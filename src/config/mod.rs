//! Configuration loading for forkful.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Configuration File Location
//!
//! The user config lives at `~/.forkful/config.yml`; `--config` points at
//! another file. Command-line flags and `FORKFUL_DATA_DIR` override it.
//!
//! ```yaml
//! data_dir: /home/me/.local/share/forkful
//! default_output: normal
//! watch:
//!   poll_interval_ms: 500
//! ```

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, default_data_dir, load_config, load_config_file};
pub use schema::{ForkfulConfig, OutputMode, WatchSettings};
