//! Clear command implementation.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::open_favorites;

/// The clear command implementation.
pub struct ClearCommand {
    data_dir: PathBuf,
}

impl ClearCommand {
    /// Create a new clear command.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }
}

impl Command for ClearCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (_store, favorites) = open_favorites(&self.data_dir);
        let count = favorites.len();
        favorites.clear();

        let noun = if count == 1 { "favorite" } else { "favorites" };
        ui.success(&format!("Removed {} {}", count, noun));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn clear_removes_everything() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("favoriteRecipes.json");
        fs::write(&path, r#"[{"idMeal":"1"},{"idMeal":"2"}]"#).unwrap();
        let mut ui = MockUI::new();

        ClearCommand::new(temp.path()).execute(&mut ui).unwrap();

        assert_eq!(ui.successes(), ["Removed 2 favorites"]);
        assert!(!path.exists());
    }

    #[test]
    fn clear_empty_does_not_write() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        ClearCommand::new(temp.path()).execute(&mut ui).unwrap();

        assert_eq!(ui.successes(), ["Removed 0 favorites"]);
        assert!(!temp.path().join("favoriteRecipes.json").exists());
    }
}
