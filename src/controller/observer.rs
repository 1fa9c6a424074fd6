//! Observer registry.
//!
//! Views subscribe a callback and get a `Snapshot` after every state change.
//! Callbacks run synchronously inside the controller, so they must not call
//! back into it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;

/// Callback invoked with each new snapshot.
pub type Observer = Box<dyn FnMut(&Snapshot) + Send>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Registered observers keyed by subscription.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: FxHashMap<SubscriptionId, Observer>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, observer);
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.entries.remove(&id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify(&mut self, snapshot: &Snapshot) {
        for observer in self.entries.values_mut() {
            observer(snapshot);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}
