//! Ordered, identity-unique list of recipes.

use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

use super::recipe::{json_kind, Recipe};
use super::FAVORITES_KEY;
use crate::error::{ForkfulError, Result};

/// Favorite recipes in insertion order, unique by [`Recipe::id`].
#[derive(Debug, Clone, Default)]
pub struct FavoritesCollection {
    recipes: Vec<Recipe>,
    ids: HashSet<String>,
}

impl FavoritesCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a persisted JSON value.
    ///
    /// The value must be an array. Elements without a usable identity are
    /// skipped, and only the first element for each id is kept.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(ForkfulError::MalformedPersistedData {
                key: FAVORITES_KEY.to_string(),
                message: format!("expected an array, got {}", json_kind(value)),
            });
        };

        let mut collection = Self::new();
        for (index, item) in items.iter().enumerate() {
            let recipe = match Recipe::from_value(item.clone()) {
                Ok(recipe) => recipe,
                Err(e) => {
                    warn!("Skipping stored favorite #{}: {}", index, e);
                    continue;
                }
            };
            match collection.insert(recipe) {
                Ok(true) => {}
                Ok(false) => warn!("Skipping duplicate stored favorite #{}", index),
                Err(e) => warn!("Skipping stored favorite #{}: {}", index, e),
            }
        }
        Ok(collection)
    }

    /// Parse a collection from persisted JSON text.
    pub fn from_text(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ForkfulError::MalformedPersistedData {
                key: FAVORITES_KEY.to_string(),
                message: e.to_string(),
            })?;
        Self::from_value(&value)
    }

    /// Persisted form: a JSON array of recipe objects.
    pub fn to_value(&self) -> Value {
        Value::Array(self.recipes.iter().map(Recipe::to_value).collect())
    }

    /// Append `recipe` unless one with the same id is already present.
    ///
    /// Returns `Ok(false)` for a duplicate. A recipe without an identity is
    /// rejected.
    pub fn insert(&mut self, recipe: Recipe) -> Result<bool> {
        let id = recipe.require_id()?;
        if !self.ids.insert(id.as_str().to_string()) {
            return Ok(false);
        }
        self.recipes.push(recipe);
        Ok(true)
    }

    /// Remove the recipe with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Recipe> {
        if !self.ids.remove(id) {
            return None;
        }
        let index = self.recipes.iter().position(|r| r.id() == Some(id))?;
        Some(self.recipes.remove(index))
    }

    /// Remove every recipe.
    pub fn clear(&mut self) {
        self.recipes.clear();
        self.ids.clear();
    }

    /// Whether a recipe with `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Get the recipe with `id`.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        if !self.contains(id) {
            return None;
        }
        self.recipes.iter().find(|r| r.id() == Some(id))
    }

    /// Recipes in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate recipes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl PartialEq for FavoritesCollection {
    fn eq(&self, other: &Self) -> bool {
        self.recipes == other.recipes
    }
}

impl<'a> IntoIterator for &'a FavoritesCollection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
