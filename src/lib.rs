//! Forkful - Keep your favorite recipes in sync.
//!
//! Forkful maintains an ordered list of favorite recipes, persists it to a
//! key-value store and keeps every open view of the list up to date when
//! another execution context changes it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`favorites`] - Recipes, the favorites collection and its engine
//! - [`store`] - Persistent key-value stores with change notification
//! - [`subscription`] - Handles for registered listeners
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use forkful::favorites::{FavoritesEngine, Recipe};
//! use forkful::store::MemoryMedium;
//!
//! let medium = MemoryMedium::new();
//! let favorites = FavoritesEngine::new(Rc::new(medium.open()));
//!
//! let recipe = Recipe::from_json(r#"{"idMeal": "52874", "strMeal": "Beef Stroganoff"}"#).unwrap();
//! favorites.add(recipe).unwrap();
//!
//! assert!(favorites.is_favorite("52874"));
//! assert_eq!(
//!     medium.raw("favoriteRecipes").as_deref(),
//!     Some(r#"[{"idMeal":"52874","strMeal":"Beef Stroganoff"}]"#)
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
pub mod store;
pub mod subscription;
pub mod ui;

pub use error::{ForkfulError, Result};
