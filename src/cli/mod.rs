//! Command-line interface for forkful.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AddArgs, CheckArgs, Cli, Commands, ListArgs, RemoveArgs, WatchArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
