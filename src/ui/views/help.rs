//! Help panel listing keyboard shortcuts.
//!
//! Opened with '?' and closed with '?', 'q' or Escape. Scrolls when the
//! terminal is too short to show every section.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::ui::theme::Theme;

/// Shortcut sections shown in the panel: (heading, [(keys, description)]).
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Table",
        &[
            ("j / ↓", "Move cursor down"),
            ("k / ↑", "Move cursor up"),
            ("space", "Select or deselect row"),
            ("a", "Select or deselect every row on the page"),
            ("o", "Open artwork in browser"),
        ],
    ),
    (
        "Pages",
        &[
            ("n / l / →", "Next page"),
            ("p / h / ←", "Previous page"),
            ("g / Home", "First page"),
            ("G / End", "Last page"),
        ],
    ),
    (
        "Select rows",
        &[
            ("s", "Open the select-first-N popup"),
            ("Enter", "Select the first N rows across pages"),
            ("Esc", "Close the popup"),
        ],
    ),
    (
        "General",
        &[("?", "Toggle this help"), ("q / Ctrl+C", "Quit")],
    ),
];

/// Actions that can be returned from the help view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpAction {
    Close,
}

/// The help panel view.
#[derive(Debug, Default)]
pub struct HelpView {
    scroll: usize,
    /// Visible height, updated on render.
    visible_height: usize,
}

impl HelpView {
    pub fn new() -> Self {
        Self::default()
    }

    fn total_lines() -> usize {
        // heading + blank before and after each section, plus footer
        HELP_SECTIONS
            .iter()
            .map(|(_, bindings)| bindings.len() + 3)
            .sum::<usize>()
            + 1
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        Self::total_lines().saturating_sub(self.visible_height)
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<HelpAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('?'), _) | (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
                Some(HelpAction::Close)
            }
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.scroll = 0;
                None
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.scroll = self.max_scroll();
                None
            }
            // Swallow everything else while help is open
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme.border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = Paragraph::new(content_lines(theme)).scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, inner);

        if Self::total_lines() > self.visible_height && area.width > 0 {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));
            let mut state = ScrollbarState::new(self.max_scroll()).position(self.scroll);
            let scrollbar_area = Rect::new(
                area.x + area.width - 1,
                area.y + 1,
                1,
                area.height.saturating_sub(2),
            );
            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut state);
        }
    }
}

fn content_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(HelpView::total_lines());

    for (heading, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(format!("── {} ──", heading), theme.title())));
        lines.push(Line::from(""));
        for (keys, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>12}", keys),
                    Style::default()
                        .fg(theme.selected)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press ?, q, or Esc to close",
        theme.muted(),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_close_keys() {
        let mut view = HelpView::new();
        for code in [KeyCode::Char('?'), KeyCode::Char('q'), KeyCode::Esc] {
            assert_eq!(view.handle_input(key(code)), Some(HelpAction::Close));
        }
    }

    #[test]
    fn test_scroll_bounded() {
        let mut view = HelpView::new();
        view.visible_height = 5;
        for _ in 0..200 {
            view.handle_input(key(KeyCode::Char('j')));
        }
        assert_eq!(view.scroll, view.max_scroll());

        for _ in 0..200 {
            view.handle_input(key(KeyCode::Char('k')));
        }
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_no_scroll_when_everything_fits() {
        let mut view = HelpView::new();
        view.visible_height = 100;
        view.handle_input(key(KeyCode::Char('j')));
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_jump_to_bottom_and_reset() {
        let mut view = HelpView::new();
        view.visible_height = 5;
        view.handle_input(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(view.scroll, view.max_scroll());
        view.reset_scroll();
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_content_matches_line_count() {
        let lines = content_lines(&Theme::default());
        assert_eq!(lines.len(), HelpView::total_lines());
    }
}
