//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent used for titles, borders and the column header.
    pub accent: Color,
    /// Background of the row under the cursor.
    pub highlight_bg: Color,
    /// Color of a checked checkbox.
    pub selected: Color,
    /// Color for muted text such as empty cells.
    pub muted: Color,
    /// Color for inline validation feedback.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            highlight_bg: Color::DarkGray,
            selected: Color::Green,
            muted: Color::DarkGray,
            error: Color::Red,
        }
    }
}

impl Theme {
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn cursor_row(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn feedback(&self) -> Style {
        Style::default().fg(self.error)
    }
}
