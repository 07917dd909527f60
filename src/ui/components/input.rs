//! Numeric text input component.
//!
//! Accepts digits and a leading minus sign, mirroring an HTML number field.
//! Whether the value is a valid count is decided by the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A single-line numeric input.
#[derive(Debug, Clone, Default)]
pub struct NumberInput {
    /// The current input value.
    value: String,
    /// Cursor position within the value (in chars, all ASCII).
    cursor: usize,
    /// Placeholder text shown when empty.
    placeholder: String,
}

impl NumberInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with placeholder text.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.insert_char(c),
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Delete, _) => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                false
            }
            // Ctrl+U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.clear();
                changed
            }
            _ => false,
        }
    }

    /// Insert a digit, or a minus sign at the very start.
    fn insert_char(&mut self, c: char) -> bool {
        let allowed = c.is_ascii_digit()
            || (c == '-' && self.cursor == 0 && !self.value.starts_with('-'));
        if !allowed {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Render the input field with a label, showing the cursor when focused.
    pub fn render_with_label(&self, frame: &mut Frame, area: Rect, label: &str, focused: bool) {
        let showing_placeholder = self.value.is_empty() && !self.placeholder.is_empty();
        let display = if showing_placeholder {
            self.placeholder.as_str()
        } else {
            self.value.as_str()
        };

        let style = if showing_placeholder {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let border_color = if focused { Color::Yellow } else { Color::DarkGray };

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        frame.render_widget(Paragraph::new(display).style(style).block(block), area);

        if focused {
            let cursor_x = area.x + 1 + self.cursor as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut NumberInput, code: KeyCode) -> bool {
        input.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_accepts_digits() {
        let mut input = NumberInput::new();
        assert!(press(&mut input, KeyCode::Char('1')));
        assert!(press(&mut input, KeyCode::Char('5')));
        assert_eq!(input.value(), "15");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_rejects_letters_and_dots() {
        let mut input = NumberInput::new();
        assert!(!press(&mut input, KeyCode::Char('a')));
        assert!(!press(&mut input, KeyCode::Char('.')));
        assert!(input.is_empty());
    }

    #[test]
    fn test_minus_only_at_start() {
        let mut input = NumberInput::new();
        assert!(press(&mut input, KeyCode::Char('-')));
        assert!(!press(&mut input, KeyCode::Char('-')));
        press(&mut input, KeyCode::Char('3'));
        assert!(!press(&mut input, KeyCode::Char('-')));
        assert_eq!(input.value(), "-3");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = NumberInput::new();
        for c in ['1', '2', '3'] {
            press(&mut input, KeyCode::Char(c));
        }
        assert!(press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "12");

        press(&mut input, KeyCode::Home);
        assert!(press(&mut input, KeyCode::Delete));
        assert_eq!(input.value(), "2");
        assert!(!press(&mut input, KeyCode::Left));
        assert_eq!(input.cursor(), 0);
        assert!(!press(&mut input, KeyCode::Backspace));
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = NumberInput::new();
        press(&mut input, KeyCode::Char('1'));
        press(&mut input, KeyCode::Char('3'));
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('2'));
        assert_eq!(input.value(), "123");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = NumberInput::new();
        press(&mut input, KeyCode::Char('9'));
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(input.handle_input(key));
        assert!(input.is_empty());
        assert!(!input.handle_input(key));
    }

    #[test]
    fn test_placeholder_not_part_of_value() {
        let input = NumberInput::with_placeholder("Select rows...");
        assert!(input.is_empty());
        assert_eq!(input.value(), "");
    }
}
