//! Generic append-and-notify store.

use std::cell::RefCell;
use std::rc::Rc;

/// Subscriber callback receiving the full current sequence.
pub type Listener<T> = Rc<dyn Fn(&[T])>;

/// Ordered item sequence plus an append-only subscriber list.
///
/// Single-threaded by construction: callbacks run on the thread that mutates
/// the store and are never re-entered concurrently.
pub struct ObservableStore<T> {
    items: RefCell<Vec<T>>,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Default for ObservableStore<T> {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> ObservableStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subscriber. No duplicate detection.
    pub fn subscribe(&self, listener: impl Fn(&[T]) + 'static) {
        self.subscribe_shared(Rc::new(listener));
    }

    /// Appends an already shared subscriber.
    ///
    /// Registering the same `Rc` twice yields two invocations per change.
    pub fn subscribe_shared(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Appends `item`, then notifies every subscriber with a snapshot.
    ///
    /// No borrow is held while callbacks run, so a callback may read the
    /// store, subscribe, or append again. Subscribers added during a
    /// notification round are first called on the next change.
    pub fn push(&self, item: T) {
        self.items.borrow_mut().push(item);
        self.notify();
    }

    /// Returns a copy of the current sequence.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(snapshot.as_slice());
        }
    }
}
