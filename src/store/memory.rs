//! In-process shared storage medium.
//!
//! [`MemoryMedium`] plays the part of a browser origin's storage: a set of
//! named slots shared by every [`MemoryStore`] opened on it. Each store is a
//! separate execution context. A write through one context queues a change
//! event for every listener registered by the other contexts; nothing is
//! delivered until the host calls [`MemoryMedium::dispatch_pending`].

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::{Rc, Weak};

use tracing::debug;

use super::{ChangeCallback, ChangeListener, PersistentStore};
use crate::error::{ForkfulError, Result};
use crate::subscription::{Entry, Listeners, Subscription};

/// A change waiting for delivery to one listener.
struct PendingChange {
    listener: Entry<ChangeListener>,
    new_value: Option<String>,
}

struct Context {
    id: u64,
    listeners: Weak<Listeners<ChangeListener>>,
}

#[derive(Default)]
struct MediumState {
    slots: RefCell<HashMap<String, String>>,
    contexts: RefCell<Vec<Context>>,
    pending: RefCell<VecDeque<PendingChange>>,
    next_context: Cell<u64>,
    fail_writes: Cell<bool>,
}

/// Storage medium shared by several [`MemoryStore`] contexts.
///
/// Cloning a medium yields another handle on the same slots.
#[derive(Clone, Default)]
pub struct MemoryMedium {
    state: Rc<MediumState>,
}

impl MemoryMedium {
    /// Create an empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new execution context on this medium.
    pub fn open(&self) -> MemoryStore {
        let id = self.state.next_context.get();
        self.state.next_context.set(id + 1);

        let listeners = Rc::new(Listeners::new());
        self.state.contexts.borrow_mut().push(Context {
            id,
            listeners: Rc::downgrade(&listeners),
        });

        MemoryStore {
            id,
            medium: self.clone(),
            listeners,
        }
    }

    /// Put raw text into a slot without notifying anyone.
    ///
    /// Stands in for data left behind by an earlier session.
    pub fn seed(&self, key: &str, text: &str) {
        self.state
            .slots
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
    }

    /// Raw text currently held under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.slots.borrow().get(key).cloned()
    }

    /// Make every subsequent write fail, as a full or disabled medium would.
    pub fn fail_writes(&self, fail: bool) {
        self.state.fail_writes.set(fail);
    }

    /// Number of change events waiting for delivery.
    pub fn pending(&self) -> usize {
        self.state.pending.borrow().len()
    }

    /// Deliver queued change events, oldest first.
    ///
    /// Events whose listener was deregistered after queuing are dropped.
    /// Returns the number of callbacks invoked.
    pub fn dispatch_pending(&self) -> usize {
        let mut delivered = 0;
        loop {
            let next = self.state.pending.borrow_mut().pop_front();
            let Some(change) = next else {
                break;
            };
            if !change.listener.is_active() {
                continue;
            }
            (change.listener.value().callback)(change.new_value.as_deref());
            delivered += 1;
        }
        delivered
    }

    fn queue_change(&self, origin: u64, key: &str, new_value: Option<&str>) {
        let mut contexts = self.state.contexts.borrow_mut();
        contexts.retain(|c| c.listeners.strong_count() > 0);

        let mut pending = self.state.pending.borrow_mut();
        for context in contexts.iter().filter(|c| c.id != origin) {
            let Some(listeners) = context.listeners.upgrade() else {
                continue;
            };
            for listener in listeners.active() {
                if listener.value().key == key {
                    pending.push_back(PendingChange {
                        listener,
                        new_value: new_value.map(str::to_string),
                    });
                }
            }
        }
        debug!("Queued change to '{}' ({} pending)", key, pending.len());
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.state.fail_writes.get() {
            return Err(ForkfulError::PersistenceUnavailable {
                key: key.to_string(),
                message: "storage quota exceeded".to_string(),
            });
        }
        Ok(())
    }
}

/// One execution context on a [`MemoryMedium`].
pub struct MemoryStore {
    id: u64,
    medium: MemoryMedium,
    listeners: Rc<Listeners<ChangeListener>>,
}

impl MemoryStore {
    /// The medium this context belongs to.
    pub fn medium(&self) -> &MemoryMedium {
        &self.medium
    }
}

impl PersistentStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.medium.raw(key))
    }

    fn store_raw(&self, key: &str, text: &str) -> Result<()> {
        self.medium.check_writable(key)?;
        self.medium
            .state
            .slots
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
        self.medium.queue_change(self.id, key, Some(text));
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<()> {
        self.medium.check_writable(key)?;
        let removed = self.medium.state.slots.borrow_mut().remove(key);
        if removed.is_some() {
            self.medium.queue_change(self.id, key, None);
        }
        Ok(())
    }

    fn on_external_change(&self, key: &str, callback: ChangeCallback) -> Subscription {
        self.listeners.register(Rc::new(ChangeListener {
            key: key.to_string(),
            callback,
        }))
    }
}
