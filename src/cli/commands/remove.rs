//! Remove command implementation.
//!
//! The `forkful remove` command removes a recipe from the favorites by id.

use std::path::{Path, PathBuf};

use crate::cli::args::RemoveArgs;
use crate::error::Result;
use crate::favorites::RecipeId;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::recipe_label;
use super::open_favorites;

/// The remove command implementation.
pub struct RemoveCommand {
    data_dir: PathBuf,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(data_dir: &Path, args: RemoveArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let id = RecipeId::new(self.args.id.as_str())?;
        let (_store, favorites) = open_favorites(&self.data_dir);

        let Some(recipe) = favorites.get(id.as_str()) else {
            ui.warning(&format!("Recipe {} is not a favorite", id));
            return Ok(CommandResult::success());
        };

        favorites.remove(id.as_str())?;
        ui.success(&format!("Removed '{}' from favorites", recipe_label(&recipe)));
        Ok(CommandResult::success())
    }
}
