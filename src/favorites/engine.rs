//! The favorites state manager.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use super::{FavoritesCollection, Recipe, RecipeId, FAVORITES_KEY};
use crate::error::Result;
use crate::store::PersistentStore;
use crate::subscription::{Listeners, Subscription};

type Listener = dyn Fn(&[Recipe]);

/// State shared with the store's change callback.
struct Shared {
    collection: RefCell<FavoritesCollection>,
    listeners: Listeners<Listener>,
}

impl Shared {
    /// Call every subscriber with the current list.
    ///
    /// Runs with no borrow held, so subscribers may call back into the engine.
    fn notify(&self) {
        let snapshot = self.collection.borrow().recipes().to_vec();
        for listener in self.listeners.active() {
            if listener.is_active() {
                (listener.value())(snapshot.as_slice());
            }
        }
    }

    /// Replace the collection with one written by another context.
    fn reconcile(&self, new_value: Option<&str>) {
        let next = match new_value {
            Some(text) => match FavoritesCollection::from_text(text) {
                Ok(next) => next,
                Err(e) => {
                    warn!("Ignoring external favorites change: {}", e);
                    return;
                }
            },
            None => FavoritesCollection::new(),
        };

        if *self.collection.borrow() == next {
            return;
        }
        debug!("Reconciled {} favorites from another context", next.len());
        *self.collection.borrow_mut() = next;
        self.notify();
    }
}

/// Owns the favorite recipes and keeps them in sync with a [`PersistentStore`].
///
/// Every mutation is applied in memory first, then written to the store
/// under [`FAVORITES_KEY`], then announced to subscribers. Changes written by
/// other contexts replace the whole in-memory list (last writer wins), so two
/// contexts adding different recipes at the same time can lose one addition.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use forkful::favorites::{FavoritesEngine, Recipe};
/// use forkful::store::MemoryMedium;
/// use serde_json::json;
///
/// let medium = MemoryMedium::new();
/// let engine = FavoritesEngine::new(Rc::new(medium.open()));
///
/// let recipe = Recipe::from_value(json!({"idMeal": "52874", "strMeal": "Beef Stroganoff"})).unwrap();
/// engine.add(recipe).unwrap();
///
/// assert!(engine.is_favorite("52874"));
/// assert_eq!(medium.raw("favoriteRecipes").as_deref(),
///            Some(r#"[{"idMeal":"52874","strMeal":"Beef Stroganoff"}]"#));
/// ```
pub struct FavoritesEngine {
    store: Rc<dyn PersistentStore>,
    shared: Rc<Shared>,
    _external: Subscription,
}

impl FavoritesEngine {
    /// Load favorites from `store` and start following external changes.
    ///
    /// A missing or malformed stored value yields an empty list.
    pub fn new(store: Rc<dyn PersistentStore>) -> Self {
        let collection = match store.read(FAVORITES_KEY) {
            Some(value) => FavoritesCollection::from_value(&value).unwrap_or_else(|e| {
                warn!("Starting with no favorites: {}", e);
                FavoritesCollection::new()
            }),
            None => FavoritesCollection::new(),
        };
        debug!("Loaded {} favorites", collection.len());

        let shared = Rc::new(Shared {
            collection: RefCell::new(collection),
            listeners: Listeners::new(),
        });

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let external = store.on_external_change(
            FAVORITES_KEY,
            Box::new(move |new_value: Option<&str>| {
                if let Some(shared) = weak.upgrade() {
                    shared.reconcile(new_value);
                }
            }),
        );

        Self {
            store,
            shared,
            _external: external,
        }
    }

    /// Add `recipe` to the end of the favorites.
    ///
    /// Adding a recipe whose id is already present does nothing; the stored
    /// record is not updated. A recipe without an `idMeal` is rejected.
    pub fn add(&self, recipe: Recipe) -> Result<()> {
        let inserted = self.shared.collection.borrow_mut().insert(recipe)?;
        if !inserted {
            debug!("Recipe already a favorite, nothing to add");
            return Ok(());
        }
        self.commit();
        Ok(())
    }

    /// Remove the favorite with `id`. Removing an absent id does nothing.
    pub fn remove(&self, id: &str) -> Result<()> {
        let id = RecipeId::new(id)?;
        let removed = self.shared.collection.borrow_mut().remove(id.as_str());
        if removed.is_none() {
            debug!("Recipe {} is not a favorite, nothing to remove", id);
            return Ok(());
        }
        self.commit();
        Ok(())
    }

    /// Remove every favorite and delete the stored key.
    ///
    /// Other contexts see the key disappear and reconcile to an empty list.
    pub fn clear(&self) {
        if self.shared.collection.borrow().is_empty() {
            return;
        }
        self.shared.collection.borrow_mut().clear();
        self.store.remove(FAVORITES_KEY);
        self.shared.notify();
    }

    /// Whether `id` is a favorite.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.shared.collection.borrow().contains(id)
    }

    /// Snapshot of the favorites in insertion order.
    pub fn list(&self) -> Vec<Recipe> {
        self.shared.collection.borrow().recipes().to_vec()
    }

    /// Get a copy of the favorite with `id`.
    pub fn get(&self, id: &str) -> Option<Recipe> {
        self.shared.collection.borrow().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.shared.collection.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.collection.borrow().is_empty()
    }

    /// Call `callback` with the new list after every change, local or external.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&[Recipe]) + 'static,
    {
        self.shared.listeners.register(Rc::new(callback))
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.len()
    }

    /// Persist the current list and notify subscribers.
    fn commit(&self) {
        let value = self.shared.collection.borrow().to_value();
        self.store.write(FAVORITES_KEY, &value);
        self.shared.notify();
    }
}
