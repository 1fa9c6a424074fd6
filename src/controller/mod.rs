//! Presentation controller: round state, score, observers.
//!
//! The controller is the single owner of everything the view displays.
//! State machine:
//!
//! - `Idle` --play--> `Resolved`
//! - `Resolved` --play--> `Resolved` (fresh draw, reveal restarts)
//! - `Resolved` --reset--> `Idle`
//!
//! There is no terminal state; a session cycles until it is dropped.

#[allow(clippy::module_inception)]
pub mod controller;
pub mod observer;
pub mod snapshot;
pub mod state;

use std::sync::{Arc, Mutex, MutexGuard};

pub use controller::GameController;
pub use observer::{Observer, Observers, SubscriptionId};
pub use snapshot::{RoundRecord, Snapshot};
pub use state::{RoundPhase, RoundState};

/// Controller shared between a session and its reveal drivers.
pub type SharedController<S> = Arc<Mutex<GameController<S>>>;

/// Lock a shared controller.
///
/// Every mutation leaves the state consistent before it can panic (observers
/// run last), so a poisoned lock is safe to recover.
pub fn lock<S>(shared: &SharedController<S>) -> MutexGuard<'_, GameController<S>> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
