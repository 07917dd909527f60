//! "Select first N rows" popup.
//!
//! A small dialog anchored over the table with a numeric input and an inline
//! feedback line. Parsing and range checks happen in the selection layer; the
//! popup only collects the text and displays whatever message comes back.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::input::NumberInput;
use crate::ui::{centered_rect, theme::Theme};

/// Action returned from the bulk-select popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkSelectAction {
    /// User submitted the raw input text.
    Submit(String),
    /// User closed the popup.
    Cancel,
}

/// Popup for selecting the first N rows of the whole result set.
#[derive(Debug)]
pub struct BulkSelectPopup {
    input: NumberInput,
    /// Validation or fetch feedback shown under the input.
    feedback: Option<String>,
    visible: bool,
}

impl Default for BulkSelectPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkSelectPopup {
    pub fn new() -> Self {
        Self {
            input: NumberInput::with_placeholder("Select rows..."),
            feedback: None,
            visible: false,
        }
    }

    /// Show the popup. Feedback from a previous attempt is cleared.
    pub fn show(&mut self) {
        self.feedback = None;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn set_feedback(&mut self, message: impl Into<String>) {
        self.feedback = Some(message.into());
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    /// Handle keyboard input while the popup has focus.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<BulkSelectAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Some(BulkSelectAction::Submit(self.input.value().to_string())),
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.visible = false;
                Some(BulkSelectAction::Cancel)
            }
            _ => {
                self.input.handle_input(key);
                None
            }
        }
    }

    /// Render the popup if visible.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }

        let width = 44u16.min(area.width.saturating_sub(4));
        // border (2) + input (3) + feedback (1) + hint (1)
        let height = 7u16.min(area.height);
        let dialog_area = centered_rect(width, height, area);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Span::styled(" Select rows ", theme.title()))
            .borders(Borders::ALL)
            .border_style(theme.border());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        if inner.height < 3 {
            return;
        }

        let input_area = Rect::new(inner.x, inner.y, inner.width, 3);
        self.input
            .render_with_label(frame, input_area, "Count", true);

        if inner.height > 3 {
            let feedback_area = Rect::new(inner.x, inner.y + 3, inner.width, 1);
            if let Some(message) = &self.feedback {
                frame.render_widget(
                    Paragraph::new(Span::styled(message.as_str(), theme.feedback())),
                    feedback_area,
                );
            }
        }

        if inner.height > 4 {
            let hint_area = Rect::new(inner.x, inner.y + 4, inner.width, 1);
            let hint = Paragraph::new(Span::styled("Enter:submit  Esc:cancel", theme.muted()))
                .alignment(Alignment::Center);
            frame.render_widget(hint, hint_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_popup_is_hidden() {
        let popup = BulkSelectPopup::new();
        assert!(!popup.is_visible());
        assert!(popup.feedback().is_none());
    }

    #[test]
    fn test_show_clears_feedback() {
        let mut popup = BulkSelectPopup::new();
        popup.show();
        popup.set_feedback("Only 10 rows are available.");
        popup.hide();

        popup.show();
        assert!(popup.is_visible());
        assert!(popup.feedback().is_none());
    }

    #[test]
    fn test_typing_and_submit() {
        let mut popup = BulkSelectPopup::new();
        popup.show();
        assert_eq!(popup.handle_input(key(KeyCode::Char('1'))), None);
        assert_eq!(popup.handle_input(key(KeyCode::Char('5'))), None);
        assert_eq!(
            popup.handle_input(key(KeyCode::Enter)),
            Some(BulkSelectAction::Submit("15".to_string()))
        );
        // Submitting leaves the popup open until the app decides
        assert!(popup.is_visible());
    }

    #[test]
    fn test_empty_submit_passes_raw_text() {
        let mut popup = BulkSelectPopup::new();
        popup.show();
        assert_eq!(
            popup.handle_input(key(KeyCode::Enter)),
            Some(BulkSelectAction::Submit(String::new()))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut popup = BulkSelectPopup::new();
        popup.show();
        assert_eq!(
            popup.handle_input(key(KeyCode::Esc)),
            Some(BulkSelectAction::Cancel)
        );
        assert!(!popup.is_visible());
    }

    #[test]
    fn test_input_kept_between_openings() {
        let mut popup = BulkSelectPopup::new();
        popup.show();
        popup.handle_input(key(KeyCode::Char('7')));
        popup.handle_input(key(KeyCode::Esc));
        popup.show();
        assert_eq!(popup.value(), "7");
    }
}
