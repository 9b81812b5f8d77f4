//! Change notifications emitted by the entry store.
//!
//! Consumers register a callback with [`EntryStore::subscribe`](super::EntryStore::subscribe)
//! and re-derive whatever they display when a [`StoreChange`] arrives. Callbacks run
//! after the mutation that produced the change has been fully applied, so a
//! subscriber reading the store never sees a half-applied state.

use crate::domain::EntryId;
use std::fmt;

/// A single mutation of the entry store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// A new entry was added.
    Inserted(EntryId),
    /// An existing entry was replaced by a new snapshot.
    Updated(EntryId),
    /// An entry was removed.
    Removed(EntryId),
    /// The pending-delete slot was armed (`Some`) or cleared (`None`).
    PendingDelete(Option<EntryId>),
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StoreChange)>;

/// Registry of change callbacks.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    /// Registers a callback and returns its handle.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Delivers a change to every callback in registration order.
    pub fn notify(&mut self, change: &StoreChange) {
        if self.is_empty() {
            return;
        }
        tracing::trace!(change = ?change, subscribers = self.callbacks.len(), "notifying subscribers");
        for (_, callback) in &mut self.callbacks {
            callback(change);
        }
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_in_order_and_stops_after_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let sink = Rc::clone(&seen);
        let handle = subscribers.subscribe(move |change| sink.borrow_mut().push(*change));

        let id = EntryId::new();
        subscribers.notify(&StoreChange::Inserted(id));
        assert!(subscribers.unsubscribe(handle));
        assert!(!subscribers.unsubscribe(handle));
        subscribers.notify(&StoreChange::Removed(id));

        assert_eq!(*seen.borrow(), vec![StoreChange::Inserted(id)]);
        assert!(subscribers.is_empty());
    }
}
