//! Application settings configuration.

use serde::{Deserialize, Serialize};

/// Application-wide UI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Whether to use vim-style keybindings (h/j/k/l).
    pub vim_mode: bool,
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vim_mode: true,
            tick_rate_ms: 100,
        }
    }
}
