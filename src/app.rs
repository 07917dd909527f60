//! Main application state and update logic.
//!
//! This module implements The Elm Architecture (TEA): `update` and
//! `handle_api_message` are the only places state changes, and `view` is a
//! function of that state. Network work is handed to the `TaskSpawner`;
//! results come back through `handle_api_message`.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::events::{Event, KeyAction, KeyBindings, KeyContext};
use crate::selection::SelectionController;
use crate::tasks::{ApiMessage, TaskSpawner};
use crate::ui::{
    centered_rect, render_context_help, ArtworkTableView, BulkSelectAction, BulkSelectPopup,
    HelpAction, HelpView, LoadingIndicator, NotificationManager, Theme,
};

/// The current screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// The artwork table, possibly with the bulk-select popup open.
    #[default]
    Table,
    /// Help panel is displayed.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    state: AppState,
    should_quit: bool,
    controller: SelectionController,
    tasks: TaskSpawner,
    bindings: KeyBindings,
    table_view: ArtworkTableView,
    help_view: HelpView,
    bulk_popup: BulkSelectPopup,
    notifications: NotificationManager,
    loading: LoadingIndicator,
    theme: Theme,
}

impl App {
    /// Create the application. Call `start` to request the first page.
    pub fn new(config: &Config, tasks: TaskSpawner) -> Self {
        debug!(page_size = config.source.page_size, "Creating application");
        Self {
            state: AppState::Table,
            should_quit: false,
            controller: SelectionController::new(config.source.page_size),
            tasks,
            bindings: KeyBindings::new(config.settings.vim_mode),
            table_view: ArtworkTableView::new(),
            help_view: HelpView::new(),
            bulk_popup: BulkSelectPopup::new(),
            notifications: NotificationManager::new(),
            loading: LoadingIndicator::new(),
            theme: Theme::default(),
        }
    }

    /// Request the first page.
    pub fn start(&mut self) {
        info!("Loading first page");
        self.request_page(0);
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub fn bulk_popup(&self) -> &BulkSelectPopup {
        &self.bulk_popup
    }

    pub fn cursor(&self) -> usize {
        self.table_view.cursor()
    }

    /// Update the application state based on a terminal event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                trace!(key = ?key.code, modifiers = ?key.modifiers, "Key event");
                self.handle_key_event(key);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => {
                self.loading.tick();
                self.notifications.tick();
            }
        }
    }

    /// Apply the result of a background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::PageFetched { page_index, result } => {
                let previous = self.controller.current_page();
                match self.controller.finish_page_load(page_index, result) {
                    Ok(true) => {
                        if previous != page_index {
                            self.table_view.reset_cursor();
                        }
                        self.table_view.clamp(self.controller.records().len());
                    }
                    Ok(false) => {}
                    Err(e) => self.notify_error(&AppError::Api(e)),
                }
            }
            ApiMessage::BulkCollected { requested, result } => {
                match self.controller.finish_bulk_select(result) {
                    Ok(count) => {
                        if (count as u64) < requested {
                            self.notifications
                                .info(format!("Selected {} of {} requested rows", count, requested));
                        } else {
                            self.notifications.success(format!("Selected {} rows", count));
                        }
                        // The controller marked page 0 pending; fetch it
                        self.tasks.spawn_fetch_page(0, self.controller.page_size());
                        self.table_view.reset_cursor();
                    }
                    Err(e) => self.notify_error(&AppError::BulkSelect(e)),
                }
            }
        }
        self.sync_loading();
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.state {
            AppState::Exiting => {}
            AppState::Help => {
                if let Some(HelpAction::Close) = self.help_view.handle_input(key) {
                    self.state = AppState::Table;
                }
            }
            AppState::Table if self.bulk_popup.is_visible() => {
                match self.bulk_popup.handle_input(key) {
                    Some(BulkSelectAction::Submit(input)) => self.submit_bulk_select(&input),
                    Some(BulkSelectAction::Cancel) => debug!("Bulk select popup closed"),
                    None => {}
                }
            }
            AppState::Table => {
                if let Some(action) = self.bindings.action_for(key) {
                    self.handle_table_action(action);
                }
            }
        }
    }

    fn handle_table_action(&mut self, action: KeyAction) {
        let row_count = self.controller.records().len();
        let page_count = self.controller.page_count();
        // Navigate relative to a page that is still loading so repeated
        // presses are not lost
        let base_page = self
            .controller
            .pending_page()
            .unwrap_or(self.controller.current_page());

        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                self.state = AppState::Exiting;
            }
            KeyAction::Help => {
                self.help_view.reset_scroll();
                self.state = AppState::Help;
            }
            KeyAction::MoveDown => self.table_view.move_down(row_count),
            KeyAction::MoveUp => self.table_view.move_up(),
            KeyAction::NextPage => {
                if base_page + 1 < page_count {
                    self.request_page(base_page + 1);
                }
            }
            KeyAction::PrevPage => {
                if base_page > 0 {
                    self.request_page(base_page - 1);
                }
            }
            KeyAction::FirstPage => {
                // Also retries a first page that never loaded
                let nothing_loaded =
                    self.controller.records().is_empty() && self.controller.pending_page().is_none();
                if base_page != 0 || nothing_loaded {
                    self.request_page(0);
                }
            }
            KeyAction::LastPage => {
                let last = page_count.saturating_sub(1);
                if base_page != last {
                    self.request_page(last);
                }
            }
            KeyAction::ToggleRow => {
                if let Some(artwork) = self.controller.records().get(self.table_view.cursor()) {
                    let id = artwork.id;
                    self.controller.toggle_record(id);
                }
            }
            KeyAction::TogglePage => self.controller.toggle_page(),
            KeyAction::OpenBulkSelect => self.bulk_popup.show(),
            KeyAction::OpenInBrowser => self.open_in_browser(),
        }
    }

    fn request_page(&mut self, page_index: u32) {
        self.controller.begin_page_load(page_index);
        self.tasks
            .spawn_fetch_page(page_index, self.controller.page_size());
        self.sync_loading();
    }

    fn submit_bulk_select(&mut self, input: &str) {
        match self.controller.begin_bulk_select_input(input) {
            Ok(count) => {
                self.bulk_popup.clear_feedback();
                self.bulk_popup.hide();
                self.tasks
                    .spawn_bulk_select(count, self.controller.page_size());
                self.sync_loading();
            }
            Err(e) => {
                debug!(error = %e, input, "Bulk select rejected");
                self.bulk_popup.set_feedback(e.to_string());
            }
        }
    }

    fn open_in_browser(&mut self) {
        let Some(artwork) = self.controller.records().get(self.table_view.cursor()) else {
            return;
        };
        let url = artwork.web_url();
        debug!(url = %url, "Opening artwork in browser");
        if let Err(e) = open::that(&url) {
            warn!(error = %e, url = %url, "Failed to open browser");
            self.notifications
                .error(format!("Could not open browser: {}", e));
        }
    }

    fn notify_error(&mut self, error: &AppError) {
        debug!(error = %error, "Recoverable error occurred");
        self.notifications.error(error.user_message());
    }

    /// Keep the spinner in step with the controller's loading state.
    fn sync_loading(&mut self) {
        if !self.controller.is_loading() {
            self.loading.stop();
            return;
        }
        let message = if self.controller.is_bulk_in_flight() {
            "Selecting rows...".to_string()
        } else if let Some(page) = self.controller.pending_page() {
            format!("Loading page {}...", page + 1)
        } else {
            "Loading...".to_string()
        };
        self.loading.start_with_message(message);
    }

    fn key_context(&self) -> KeyContext {
        match self.state {
            AppState::Help => KeyContext::Help,
            _ if self.bulk_popup.is_visible() => KeyContext::BulkSelect,
            _ => KeyContext::Table,
        }
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let snapshot = self.controller.snapshot();
        let loading_text = self.loading.text();
        self.table_view
            .render(frame, content_area, &snapshot, &loading_text, &self.theme);

        render_context_help(frame, footer_area, self.key_context());

        self.bulk_popup.render(frame, content_area, &self.theme);

        if self.state == AppState::Help {
            let help_area = centered_rect(
                64.min(area.width.saturating_sub(4)),
                area.height.saturating_sub(4),
                area,
            );
            self.help_view.render(frame, help_area, &self.theme);
        }

        self.notifications.render(frame, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled("Artable", self.theme.title())))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.theme.muted()),
            );
        frame.render_widget(title, area);
    }
}
