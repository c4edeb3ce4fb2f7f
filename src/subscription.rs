//! Callback registration handles.
//!
//! Both the store's change channel and the favorites engine hand out a
//! [`Subscription`] when a callback is registered. The handle deregisters the
//! callback when [`Subscription::unsubscribe`] is called or when it is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle for a registered callback.
///
/// Unsubscribing is idempotent; calling it after the callback was already
/// removed does nothing.
#[must_use = "dropping a Subscription deregisters its callback"]
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    /// Deregister the callback.
    pub fn unsubscribe(&self) {
        self.active.set(false);
    }

    /// Whether the callback is still registered.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A registered listener together with its liveness flag.
pub(crate) struct Entry<T: ?Sized> {
    active: Rc<Cell<bool>>,
    value: Rc<T>,
}

impl<T: ?Sized> Entry<T> {
    pub(crate) fn is_active(&self) -> bool {
        self.active.get()
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }
}

impl<T: ?Sized> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Self {
            active: Rc::clone(&self.active),
            value: Rc::clone(&self.value),
        }
    }
}

/// An ordered set of listeners.
///
/// Callers take a snapshot with [`Listeners::active`] and invoke it after
/// releasing any borrows, so a listener may register or unsubscribe others
/// while being called.
pub(crate) struct Listeners<T: ?Sized> {
    entries: RefCell<Vec<Entry<T>>>,
}

impl<T: ?Sized> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Register a listener and return its handle.
    pub(crate) fn register(&self, value: Rc<T>) -> Subscription {
        let active = Rc::new(Cell::new(true));
        self.entries.borrow_mut().push(Entry {
            active: Rc::clone(&active),
            value,
        });
        Subscription { active }
    }

    /// Snapshot of the currently registered listeners, in registration order.
    ///
    /// Deregistered entries are pruned along the way.
    pub(crate) fn active(&self) -> Vec<Entry<T>> {
        let mut entries = self.entries.borrow_mut();
        entries.retain(Entry::is_active);
        entries.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().iter().filter(|e| e.is_active()).count()
    }
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_snapshot() {
        let listeners: Listeners<str> = Listeners::new();
        let _a = listeners.register(Rc::from("a"));
        let _b = listeners.register(Rc::from("b"));

        let values: Vec<String> = listeners
            .active()
            .iter()
            .map(|e| e.value().to_string())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn unsubscribe_removes_listener() {
        let listeners: Listeners<str> = Listeners::new();
        let a = listeners.register(Rc::from("a"));
        let _b = listeners.register(Rc::from("b"));

        a.unsubscribe();

        assert_eq!(listeners.len(), 1);
        assert!(!a.is_active());
    }

    #[test]
    fn unsubscribe_twice_is_safe() {
        let listeners: Listeners<str> = Listeners::new();
        let a = listeners.register(Rc::from("a"));

        a.unsubscribe();
        a.unsubscribe();

        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn drop_deregisters() {
        let listeners: Listeners<str> = Listeners::new();
        {
            let _a = listeners.register(Rc::from("a"));
            assert_eq!(listeners.len(), 1);
        }
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn snapshot_entry_sees_later_unsubscribe() {
        let listeners: Listeners<str> = Listeners::new();
        let a = listeners.register(Rc::from("a"));

        let snapshot = listeners.active();
        a.unsubscribe();

        assert!(!snapshot[0].is_active());
    }
}
