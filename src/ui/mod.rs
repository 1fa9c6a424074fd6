//! Terminal front end: rendering and the control menu.

pub mod render;
pub mod menu;

pub use render::{render, Palette, Rgb, TITLE};
pub use menu::{prompt, MenuItem};
