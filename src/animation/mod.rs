//! Result reveal animation.
//!
//! Each resolved round fades its result banner in over a fixed duration.
//! Progress is linear in time and stored on the round state; the easing curve
//! only shapes the opacity derived from it.
//!
//! ## Supersession
//!
//! Every `play` (and every `reset`) bumps the controller's generation. Driver
//! tasks carry the generation they were started for, so a driver from an
//! older round finds out on its next tick and stops. Only the latest reveal
//! ever writes progress.

pub mod easing;
pub mod reveal;
pub mod driver;

pub use easing::Easing;
pub use reveal::{reveal_progress, AnimationTick, RevealTicket};
pub use driver::drive_reveal;
