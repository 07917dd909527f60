//! Artwork table view.
//!
//! Renders one page of artworks with a checkbox column, a cursor row and a
//! status line with the page position and selection count.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::types::Artwork;
use crate::selection::ControllerSnapshot;
use crate::ui::theme::Theme;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const PARTIAL: &str = "[-]";

/// Column headers after the checkbox column.
const HEADERS: [&str; 6] = [
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Start Date",
    "End Date",
];

/// Cursor and scroll state for the artwork table.
#[derive(Debug, Default)]
pub struct ArtworkTableView {
    state: TableState,
}

impl ArtworkTableView {
    pub fn new() -> Self {
        Self {
            state: TableState::default().with_selected(Some(0)),
        }
    }

    /// Row index of the cursor on the current page.
    pub fn cursor(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn move_down(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let next = (self.cursor() + 1).min(row_count - 1);
        self.state.select(Some(next));
    }

    pub fn move_up(&mut self) {
        let prev = self.cursor().saturating_sub(1);
        self.state.select(Some(prev));
    }

    /// Put the cursor back on the first row, e.g. after a page change.
    pub fn reset_cursor(&mut self) {
        self.state = TableState::default().with_selected(Some(0));
    }

    /// Keep the cursor inside the current page.
    pub fn clamp(&mut self, row_count: usize) {
        let cursor = self.cursor().min(row_count.saturating_sub(1));
        self.state.select(Some(cursor));
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        snapshot: &ControllerSnapshot,
        loading_text: &str,
        theme: &Theme,
    ) {
        let [table_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        self.clamp(snapshot.records.len());

        let header = Row::new(
            std::iter::once(Cell::from(header_checkbox(snapshot)))
                .chain(HEADERS.iter().map(|h| Cell::from(*h))),
        )
        .style(theme.header());

        let rows = snapshot.records.iter().map(|artwork| {
            let checked = snapshot.selected_on_page.contains(&artwork.id);
            artwork_row(artwork, checked, theme)
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Percentage(24),
            Constraint::Percentage(14),
            Constraint::Percentage(24),
            Constraint::Percentage(18),
            Constraint::Length(10),
            Constraint::Length(10),
        ];

        let title = format!(" Artworks ({} total) ", snapshot.total_records);
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(Span::styled(title, theme.title()))
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            )
            .highlight_style(theme.cursor_row())
            .column_spacing(1);

        frame.render_stateful_widget(table, table_area, &mut self.state);

        if snapshot.records.is_empty() && !snapshot.loading {
            let inner = Rect::new(
                table_area.x + 1,
                table_area.y + 2,
                table_area.width.saturating_sub(2),
                1,
            );
            if inner.y < table_area.y + table_area.height.saturating_sub(1) {
                frame.render_widget(
                    Paragraph::new(Span::styled("No artworks found", theme.muted())),
                    inner,
                );
            }
        }

        frame.render_widget(Paragraph::new(status_line(snapshot, loading_text, theme)), status_area);
    }
}

fn header_checkbox(snapshot: &ControllerSnapshot) -> &'static str {
    let on_page = snapshot.selected_on_page.len();
    if on_page == 0 {
        UNCHECKED
    } else if on_page == snapshot.records.len() {
        CHECKED
    } else {
        PARTIAL
    }
}

fn artwork_row<'a>(artwork: &'a Artwork, checked: bool, theme: &Theme) -> Row<'a> {
    let checkbox = if checked {
        Cell::from(Span::styled(CHECKED, Style::default().fg(theme.selected)))
    } else {
        Cell::from(UNCHECKED)
    };

    Row::new(vec![
        checkbox,
        Cell::from(artwork.title()),
        Cell::from(artwork.place_of_origin()),
        Cell::from(artwork.artist()),
        Cell::from(artwork.inscriptions()),
        Cell::from(artwork.date_start_display()),
        Cell::from(artwork.date_end_display()),
    ])
}

fn status_line<'a>(snapshot: &ControllerSnapshot, loading_text: &'a str, theme: &Theme) -> Line<'a> {
    let page = if snapshot.page_count == 0 {
        "Page 0 of 0".to_string()
    } else {
        format!("Page {} of {}", snapshot.page_index + 1, snapshot.page_count)
    };

    let mut spans = vec![
        Span::styled(page, theme.title()),
        Span::raw("  "),
        Span::styled(
            format!("{} selected", snapshot.selected_total),
            Style::default().fg(theme.selected),
        ),
    ];
    if !loading_text.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(loading_text, theme.muted()));
    }
    Line::from(spans)
}
