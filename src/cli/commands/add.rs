//! Add command implementation.
//!
//! The `forkful add` command adds a recipe, given as a JSON object, to the
//! favorites.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::args::AddArgs;
use crate::error::{ForkfulError, Result};
use crate::favorites::Recipe;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::recipe_label;
use super::open_favorites;

/// The add command implementation.
pub struct AddCommand {
    data_dir: PathBuf,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(data_dir: &Path, args: AddArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AddArgs {
        &self.args
    }

    fn read_recipe_text(&self) -> Result<String> {
        if let Some(path) = &self.args.file {
            return Ok(fs::read_to_string(path)?);
        }
        match self.args.recipe.as_deref() {
            Some("-") => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Some(text) => Ok(text.to_string()),
            None => Err(ForkfulError::invalid_argument(
                "provide a recipe as JSON, '-' for stdin, or --file",
            )),
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let recipe = Recipe::from_json(&self.read_recipe_text()?)?;
        let id = recipe.require_id()?;
        let label = recipe_label(&recipe);

        let (_store, favorites) = open_favorites(&self.data_dir);
        if favorites.is_favorite(id.as_str()) {
            ui.warning(&format!("'{}' is already a favorite", label));
            return Ok(CommandResult::success());
        }

        favorites.add(recipe)?;
        ui.success(&format!("Added '{}' to favorites", label));
        ui.detail(&format!("{} favorites in {}", favorites.len(), self.data_dir.display()));
        Ok(CommandResult::success())
    }
}
