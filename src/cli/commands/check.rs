//! Check command implementation.
//!
//! The `forkful check` command reports whether a recipe is a favorite. It
//! exits non-zero when it is not, so it can be used in scripts.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::favorites::RecipeId;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::open_favorites;

/// The check command implementation.
pub struct CheckCommand {
    data_dir: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(data_dir: &Path, args: CheckArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let id = RecipeId::new(self.args.id.as_str())?;
        let (_store, favorites) = open_favorites(&self.data_dir);

        if favorites.is_favorite(id.as_str()) {
            ui.message(&format!("{} is a favorite", id));
            Ok(CommandResult::success())
        } else {
            ui.message(&format!("{} is not a favorite", id));
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForkfulError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn check(temp: &TempDir, id: &str, ui: &mut MockUI) -> Result<CommandResult> {
        CheckCommand::new(temp.path(), CheckArgs { id: id.to_string() }).execute(ui)
    }

    #[test]
    fn check_favorite() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("favoriteRecipes.json"),
            r#"[{"idMeal":"52874"}]"#,
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result = check(&temp, "52874", &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("52874 is a favorite"));
    }

    #[test]
    fn check_not_favorite_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = check(&temp, "1", &mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("1 is not a favorite"));
    }

    #[test]
    fn check_empty_id_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = check(&temp, "", &mut ui).unwrap_err();

        assert!(matches!(err, ForkfulError::InvalidArgument { .. }));
    }
}
