//! Durable key/value storage shared between execution contexts.
//!
//! A [`PersistentStore`] is one execution context's view of a storage medium
//! that other contexts (other processes, other store handles) can also write.
//! Values are JSON. Writes made through one context are reported to the
//! callbacks registered by every *other* context through
//! [`PersistentStore::on_external_change`].
//!
//! Backends only implement the fallible raw primitives. The provided
//! [`read`](PersistentStore::read), [`write`](PersistentStore::write) and
//! [`remove`](PersistentStore::remove) methods are the failure boundary: any
//! error is logged and absorbed there, so callers keep working against their
//! in-memory state.
//!
//! # Example
//!
//! ```
//! use forkful::store::{MemoryMedium, PersistentStore};
//! use serde_json::json;
//!
//! let medium = MemoryMedium::new();
//! let tab = medium.open();
//!
//! tab.write("favoriteRecipes", &json!([{"idMeal": "1"}]));
//! assert_eq!(tab.read("favoriteRecipes"), Some(json!([{"idMeal": "1"}])));
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::{MemoryMedium, MemoryStore};

use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::subscription::Subscription;

/// Callback invoked with the new raw text of a key changed by another context.
///
/// `None` means the key was removed.
pub type ChangeCallback = Box<dyn Fn(Option<&str>)>;

/// A registered external-change callback.
pub(crate) struct ChangeListener {
    pub(crate) key: String,
    pub(crate) callback: ChangeCallback,
}

/// One execution context's handle on a shared key/value medium.
pub trait PersistentStore {
    /// Load the raw text stored under `key`.
    fn load_raw(&self, key: &str) -> Result<Option<String>>;

    /// Store raw text under `key`, making it visible to other contexts.
    fn store_raw(&self, key: &str, text: &str) -> Result<()>;

    /// Delete `key` from the medium.
    fn remove_raw(&self, key: &str) -> Result<()>;

    /// Register `callback` for changes to `key` made by other contexts.
    ///
    /// Writes made through this handle never invoke its own callbacks.
    /// Delivery is best-effort and may repeat, so callbacks must be idempotent.
    fn on_external_change(&self, key: &str, callback: ChangeCallback) -> Subscription;

    /// Read the JSON value stored under `key`.
    ///
    /// Returns `None` when the key is unset, when the stored text is not
    /// valid JSON, or when the medium cannot be read.
    fn read(&self, key: &str) -> Option<Value> {
        let text = match self.load_raw(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read '{}' from store: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring unparseable value stored under '{}': {}", key, e);
                None
            }
        }
    }

    /// Serialize `value` to JSON text and store it under `key`.
    ///
    /// Failures are logged and otherwise ignored.
    fn write(&self, key: &str, value: &Value) {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to serialize value for '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = self.store_raw(key, &text) {
            warn!("Failed to persist '{}': {}", key, e);
        }
    }

    /// Delete `key`. Failures are logged and otherwise ignored.
    fn remove(&self, key: &str) {
        if let Err(e) = self.remove_raw(key) {
            warn!("Failed to remove '{}' from store: {}", key, e);
        }
    }
}
