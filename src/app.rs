//! Root application component
//!
//! The App owns the board surface and the coordinator, routes Actions to
//! them and to the child components, and draws everything. Clicks on the
//! surface are resolved here: the Actions bound to a control are dispatched
//! one after the other, each run to completion.

use crate::action::Action;
use crate::board::Coordinator;
use crate::component::Component;
use crate::components::{calculate_main_layout, BoardView, HelpDialog, OverlayLayer, QuitDialog};
use crate::config::Config;
use crate::error::BoardError;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{load_seeds, sample_seeds, Category, ProjectId, ProjectSeed};
use crate::surface::BoardSurface;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{error, warn};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Wiring failure shown until the app exits
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Retained element tree the board renders from
    pub surface: BoardSurface,

    /// Owner of the two project lists
    pub coordinator: Coordinator,

    /// App-level dialogs
    pub modals: ModalStack,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub board: BoardView,
    pub overlays: OverlayLayer,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    pub config: Config,
}

impl App {
    /// Create the app from the configured seed file, or the built-in samples
    pub fn new(config: Config) -> Result<App> {
        let seeds = match &config.seed_path {
            Some(path) => load_seeds(path)?,
            None => sample_seeds(),
        };
        Self::with_seeds(seeds, config)
    }

    pub fn with_seeds(seeds: Vec<ProjectSeed>, config: Config) -> Result<App> {
        let mut surface =
            BoardSurface::from_seeds(seeds).context("Failed to build the project board")?;
        let coordinator =
            Coordinator::init(&mut surface).context("Failed to wire the project lists")?;

        let mut app = App {
            should_quit: false,
            error: None,
            status_message: None,
            surface,
            coordinator,
            modals: ModalStack::new(),
            board: BoardView::new(),
            overlays: OverlayLayer::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog,
            config,
        };
        app.sync_views();
        Ok(app)
    }

    /// Run an action and every follow-up it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(a) = current {
            current = self.update(a)?;
        }
        Ok(())
    }

    fn sync_views(&mut self) {
        self.board.sync(&self.surface);
        self.overlays.sync(&self.surface);
    }

    /// Surface a board failure without interrupting the widget
    fn report(&mut self, err: BoardError) {
        if err.is_wiring() {
            error!("event=board_error kind=wiring error={}", err);
            self.error = Some(format!("Internal wiring error: {}", err));
        } else {
            warn!("event=board_error kind=stale error={}", err);
            self.status_message = Some(err.to_string());
        }
    }

    fn title_of(&self, id: &ProjectId) -> String {
        Category::all()
            .into_iter()
            .flat_map(|category| self.surface.rows(category))
            .find(|row| &row.id == id)
            .map(|row| row.title)
            .unwrap_or_else(|| id.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => match self.overlays.handle_key_event(key)? {
                Some(action) => Ok(Some(action)),
                None => self.board.handle_key_event(key),
            },
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.overlays.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match action {
            Action::Tick | Action::Resize(_, _) => None,
            Action::ForceQuit => {
                self.should_quit = true;
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem | Action::PrevItem | Action::SwitchList => {
                self.board.update(action)?
            }

            // ─────────────────────────────────────────────────────────────────
            // Surface
            // ─────────────────────────────────────────────────────────────────
            Action::Click(control) => {
                for handler in self.surface.click(&control) {
                    self.dispatch(handler)?;
                }
                None
            }
            Action::AdvanceProject { from, id } => {
                let title = self.title_of(&id);
                match self.coordinator.move_out(from, &id, &mut self.surface) {
                    Ok(()) => {
                        self.status_message = Some(format!("Moved '{}' to {}", title, from.other()));
                    }
                    Err(err) => self.report(err),
                }
                None
            }
            Action::RequestOverlay(id) => {
                if let Err(err) = self.coordinator.request_overlay(&id, &mut self.surface) {
                    self.report(err);
                }
                None
            }
            Action::DismissOverlay(id) => {
                match self.coordinator.dismiss_overlay(&id, &mut self.surface) {
                    Ok(next) => next,
                    Err(err) => {
                        self.report(err);
                        None
                    }
                }
            }
            Action::OverlayDismissed(id) => {
                if let Err(err) = self.coordinator.overlay_closed(&id) {
                    self.report(err);
                }
                None
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                None
            }
            Action::OpenHelp => {
                self.modals.push(Modal::Help);
                None
            }
            Action::CloseModal => {
                self.modals.pop();
                None
            }
        };

        self.sync_views();
        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let status = self.error.as_ref().or(self.status_message.as_ref()).cloned();
        let layout = calculate_main_layout(area, status.is_some());

        self.board.draw(frame, layout.lists)?;

        if let (Some(status_area), Some(text)) = (layout.status, status) {
            let color = if self.error.is_some() {
                Color::Red
            } else {
                Color::Green
            };
            frame.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(color))),
                status_area,
            );
        }

        render_help_bar(frame, layout.help, !self.overlays.is_empty());

        self.overlays.draw(frame, layout.lists)?;

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect, has_overlay: bool) {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![
        key(" j/k "),
        Span::raw("Move  "),
        key(" Tab "),
        Span::raw("Switch list  "),
        key(" Enter "),
        Span::raw("Finish/Activate  "),
        key(" i "),
        Span::raw("More info  "),
    ];
    if has_overlay {
        spans.push(key(" Esc "));
        spans.push(Span::raw("Close info  "));
    }
    spans.push(key(" ? "));
    spans.push(Span::raw("Help  "));
    spans.push(key(" q "));
    spans.push(Span::raw("Quit"));

    let help = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
