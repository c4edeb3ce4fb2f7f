//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::ForkfulConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: PathBuf,
    config: ForkfulConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher operating on `data_dir`.
    pub fn new(data_dir: PathBuf, config: ForkfulConfig) -> Self {
        Self { data_dir, config }
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Add(args)) => {
                let cmd = super::add::AddCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Remove(args)) => {
                let cmd = super::remove::RemoveCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Clear) => {
                let cmd = super::clear::ClearCommand::new(&self.data_dir);
                cmd.execute(ui)
            }
            Some(Commands::Watch(args)) => {
                let cmd = super::watch::WatchCommand::new(
                    &self.data_dir,
                    &self.config.watch,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to listing favorites
                let cmd = super::list::ListCommand::new(&self.data_dir, ListArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
