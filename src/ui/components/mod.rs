//! Reusable UI components.

mod bulk_select;
mod help_bar;
mod input;
mod loading;
mod notification;

pub use bulk_select::{BulkSelectAction, BulkSelectPopup};
pub use help_bar::render_context_help;
pub use input::NumberInput;
pub use loading::LoadingIndicator;
pub use notification::{Notification, NotificationManager, NotificationType};
