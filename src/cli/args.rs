//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// forkful - Keep your favorite recipes in sync.
#[derive(Debug, Parser)]
#[command(name = "forkful")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.forkful/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the favorites data
    #[arg(long, global = true, env = "FORKFUL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a recipe to favorites
    Add(AddArgs),

    /// Remove a recipe from favorites
    Remove(RemoveArgs),

    /// List favorite recipes (default if no command specified)
    List(ListArgs),

    /// Check whether a recipe is a favorite
    Check(CheckArgs),

    /// Remove every favorite
    Clear,

    /// Follow changes made by other forkful processes
    Watch(WatchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Recipe as a JSON object, or `-` to read it from stdin
    #[arg(conflicts_with = "file")]
    pub recipe: Option<String>,

    /// Read the recipe JSON from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Recipe id (`idMeal`)
    pub id: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Recipe id (`idMeal`)
    pub id: String,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Poll interval in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Stop after this many polls
    #[arg(long, value_name = "N")]
    pub max_polls: Option<u64>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
