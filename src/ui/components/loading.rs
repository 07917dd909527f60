//! Loading indicator component.
//!
//! An animated spinner shown in the status bar while a fetch is in flight.

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A loading indicator with an animated spinner.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    /// The message to display.
    message: String,
    /// Current spinner frame index.
    spinner_state: usize,
    /// Whether the loading indicator is active.
    active: bool,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator {
    /// Create a new, inactive loading indicator.
    pub fn new() -> Self {
        Self {
            message: "Loading...".to_string(),
            spinner_state: 0,
            active: false,
        }
    }

    /// Get the current message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Start with a specific message.
    pub fn start_with_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        if !self.active {
            self.active = true;
            self.spinner_state = 0;
        }
    }

    /// Stop the loading indicator.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Check if the loading indicator is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the spinner animation. Called on each tick.
    pub fn tick(&mut self) {
        if self.active {
            self.spinner_state = (self.spinner_state + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get the current spinner frame.
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_state]
    }

    /// Get the formatted loading text, or an empty string when inactive.
    pub fn text(&self) -> String {
        if self.active {
            format!("{} {}", self.spinner_frame(), self.message)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_indicator_new() {
        let loader = LoadingIndicator::new();
        assert_eq!(loader.message(), "Loading...");
        assert!(!loader.is_active());
        assert!(loader.text().is_empty());
    }

    #[test]
    fn test_start_with_message() {
        let mut loader = LoadingIndicator::new();
        loader.start_with_message("Fetching page 2...");
        assert!(loader.is_active());
        assert!(loader.text().contains("Fetching page 2..."));

        loader.stop();
        assert!(!loader.is_active());
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut loader = LoadingIndicator::new();
        loader.start_with_message("x");

        let initial = loader.spinner_frame();
        loader.tick();
        assert_ne!(initial, loader.spinner_frame());

        for _ in 1..SPINNER_FRAMES.len() {
            loader.tick();
        }
        assert_eq!(loader.spinner_state, 0);
    }

    #[test]
    fn test_tick_inactive_does_nothing() {
        let mut loader = LoadingIndicator::new();
        loader.tick();
        assert_eq!(loader.spinner_state, 0);
    }

    #[test]
    fn test_restart_keeps_animation_running() {
        let mut loader = LoadingIndicator::new();
        loader.start_with_message("a");
        loader.tick();
        loader.start_with_message("b");
        assert_eq!(loader.spinner_state, 1);
        assert_eq!(loader.message(), "b");
    }
}
