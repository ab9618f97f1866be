//! Interactive TUI
//!
//! Letter grid, Hebrew on-screen keyboard and category buttons, driven by
//! keyboard and mouse.

mod app;
mod controls;
mod rendering;

pub use app::{App, run_tui};
pub use controls::{Control, HitMap, KEYBOARD_LAYOUT};
