//! Application views (screens).

mod help;
mod table;

pub use help::{HelpAction, HelpView};
pub use table::ArtworkTableView;
