//! User interface components and views.
//!
//! Rendering only: state changes go through the selection controller and
//! the app's update functions.

mod components;
pub mod theme;
mod views;

use ratatui::layout::Rect;

pub use components::{
    render_context_help, BulkSelectAction, BulkSelectPopup, LoadingIndicator, Notification,
    NotificationManager, NotificationType, NumberInput,
};
pub use theme::Theme;
pub use views::{ArtworkTableView, HelpAction, HelpView};

/// Calculate a centered rectangle within the given area.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
