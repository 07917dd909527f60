//! Event handling for the application.
//!
//! This module turns terminal input into application events and maps keys
//! to table actions.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{context_hints, KeyAction, KeyBindings, KeyContext};

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for animations and timers.
    Tick,
}
