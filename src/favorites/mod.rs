//! Favorite recipes.
//!
//! This module provides the [`FavoritesEngine`], which owns the user's
//! favorite recipes and keeps them synchronized with a
//! [`PersistentStore`](crate::store::PersistentStore), plus the record types
//! it works with.

mod collection;
mod engine;
mod recipe;

pub use collection::FavoritesCollection;
pub use engine::FavoritesEngine;
pub use recipe::{
    Recipe, RecipeId, CATEGORY_FIELD, IDENTITY_FIELD, NAME_FIELD, THUMBNAIL_FIELD,
};

/// Storage key holding the persisted favorites array.
pub const FAVORITES_KEY: &str = "favoriteRecipes";
