//! Shared rendering for favorites.

use crate::favorites::Recipe;
use crate::ui::{UserInterface, ID_COLUMN_WIDTH};

/// Shown when there are no favorites.
pub const EMPTY_MESSAGE: &str = "You haven't added any favorites yet.";

/// One-line label for a recipe: its name, falling back to its id.
pub fn recipe_label(recipe: &Recipe) -> String {
    match (recipe.name(), recipe.id()) {
        (Some(name), _) => name.to_string(),
        (None, Some(id)) => format!("recipe {}", id),
        (None, None) => "unnamed recipe".to_string(),
    }
}

/// Render favorites as a list, or the empty-state message.
pub fn render_favorites(ui: &mut dyn UserInterface, recipes: &[Recipe]) {
    if recipes.is_empty() {
        ui.message(EMPTY_MESSAGE);
        ui.detail("Add one with: forkful add '{\"idMeal\": \"52874\", \"strMeal\": \"Beef Stroganoff\"}'");
        return;
    }

    ui.show_header("Your Favorite Recipes");
    for recipe in recipes {
        ui.recipe_row(
            recipe.id().unwrap_or("?"),
            recipe.name().unwrap_or("(unnamed)"),
            recipe.category(),
        );
        if let Some(thumb) = recipe.thumbnail() {
            ui.detail(&format!("{:indent$}{}", "", thumb, indent = ID_COLUMN_WIDTH + 2));
        }
    }
}
