//! List command implementation.
//!
//! The `forkful list` command shows the favorite recipes in the order they
//! were added.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render_favorites;
use super::open_favorites;

/// The list command implementation.
pub struct ListCommand {
    data_dir: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(data_dir: &Path, args: ListArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (_store, favorites) = open_favorites(&self.data_dir);
        let recipes = favorites.list();

        if self.args.json {
            let json = serde_json::to_string_pretty(&recipes).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        render_favorites(ui, &recipes);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::display::EMPTY_MESSAGE;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn seed(temp: &TempDir, text: &str) {
        fs::write(temp.path().join("favoriteRecipes.json"), text).unwrap();
    }

    #[test]
    fn list_empty_directory() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = ListCommand::new(temp.path(), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), [EMPTY_MESSAGE]);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        seed(
            &temp,
            r#"[{"idMeal":"2","strMeal":"Second"},{"idMeal":"1","strMeal":"First"}]"#,
        );
        let mut ui = MockUI::new();

        ListCommand::new(temp.path(), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.messages()[0].contains("Second"));
        assert!(ui.messages()[1].contains("First"));
    }

    #[test]
    fn list_json_output() {
        let temp = TempDir::new().unwrap();
        seed(&temp, r#"[{"idMeal":"1","strMeal":"A"}]"#);
        let mut ui = MockUI::new();

        ListCommand::new(temp.path(), ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed, serde_json::json!([{"idMeal": "1", "strMeal": "A"}]));
    }

    #[test]
    fn list_treats_corrupt_file_as_empty() {
        let temp = TempDir::new().unwrap();
        seed(&temp, "not json");
        let mut ui = MockUI::new();

        let result = ListCommand::new(temp.path(), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), [EMPTY_MESSAGE]);
    }
}
