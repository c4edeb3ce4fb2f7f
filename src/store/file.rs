//! File-backed storage medium.
//!
//! Every key is stored as `<dir>/<key>.json`. Each [`FileStore`] instance is
//! one execution context, typically one process. Changes written by other
//! contexts are discovered by [`FileStore::poll`], which compares the text on
//! disk with the first text this context read, or the last text it wrote or
//! delivered.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};

use super::{ChangeCallback, ChangeListener, PersistentStore};
use crate::error::{ForkfulError, Result};
use crate::subscription::{Listeners, Subscription};

/// A directory of JSON files shared between processes.
pub struct FileStore {
    dir: PathBuf,
    listeners: Listeners<ChangeListener>,
    /// Last known text per key (`None` = absent).
    known: RefCell<HashMap<String, Option<String>>>,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            listeners: Listeners::new(),
            known: RefCell::new(HashMap::new()),
        }
    }

    /// Get the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the file path backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(ForkfulError::PersistenceUnavailable {
                key: key.to_string(),
                message: "key cannot be used as a file name".to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Check watched keys for changes made by other contexts.
    ///
    /// Every callback registered for a changed key is invoked with the new
    /// text. Returns the number of callbacks invoked.
    pub fn poll(&self) -> usize {
        let listeners = self.listeners.active();

        let mut keys: Vec<&str> = listeners.iter().map(|l| l.value().key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();

        let mut changed = Vec::new();
        for key in keys {
            let current = match self.read_file(key) {
                Ok(current) => current,
                Err(e) => {
                    warn!("Failed to poll '{}': {}", key, e);
                    continue;
                }
            };
            let mut known = self.known.borrow_mut();
            if known.get(key) != Some(&current) {
                debug!("Detected external change to '{}'", key);
                known.insert(key.to_string(), current.clone());
                changed.push((key.to_string(), current));
            }
        }

        let mut delivered = 0;
        for (key, current) in &changed {
            for listener in listeners.iter().filter(|l| l.value().key == *key) {
                if listener.is_active() {
                    (listener.value().callback)(current.as_deref());
                    delivered += 1;
                }
            }
        }
        delivered
    }

    fn read_file(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::unavailable(key, e)),
        }
    }

    fn remember(&self, key: &str, text: Option<String>) {
        self.known.borrow_mut().insert(key.to_string(), text);
    }

    fn unavailable(key: &str, err: io::Error) -> ForkfulError {
        ForkfulError::PersistenceUnavailable {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

impl PersistentStore for FileStore {
    /// The first text read for a key becomes its change baseline, so a write
    /// landing before [`PersistentStore::on_external_change`] is still polled.
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        let text = self.read_file(key)?;
        self.known
            .borrow_mut()
            .entry(key.to_string())
            .or_insert_with(|| text.clone());
        Ok(text)
    }

    /// Write using the write-to-temp-then-rename pattern so readers in other
    /// processes never see a partially written file.
    fn store_raw(&self, key: &str, text: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| Self::unavailable(key, e))?;

        let temp_path = path.with_extension(format!("json.{}.tmp", std::process::id()));
        fs::write(&temp_path, text).map_err(|e| Self::unavailable(key, e))?;
        fs::rename(&temp_path, &path).map_err(|e| Self::unavailable(key, e))?;

        self.remember(key, Some(text.to_string()));
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Self::unavailable(key, e)),
        }
        self.remember(key, None);
        Ok(())
    }

    fn on_external_change(&self, key: &str, callback: ChangeCallback) -> Subscription {
        if !self.known.borrow().contains_key(key) {
            let baseline = self.read_file(key).unwrap_or(None);
            self.remember(key, baseline);
        }
        self.listeners.register(Rc::new(ChangeListener {
            key: key.to_string(),
            callback,
        }))
    }
}
