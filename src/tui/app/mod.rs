//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.

mod update;

use crate::layout::{Breakpoint, Placement};
use crate::store::Store;
use crate::tabs::TabManager;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::grid;
use crate::tui::ui::render_dashboard;
use crate::widgets::Widget;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// How long a status message stays in the footer.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// What a text prompt collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Symbol of a widget to add.
    AddWidget,
    /// New name of the active tab.
    RenameTab,
}

/// An open single-line text prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// Whether keys drive the grid or a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Prompt(Prompt),
}

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App<S> {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Tab and widget state, persisted on every change.
    pub tabs: TabManager<S>,
    /// Index of the selected widget within the active tab.
    pub selected: Option<usize>,
    /// Current input mode.
    pub mode: InputMode,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Terminal width, updated during each render pass.
    pub terminal_width: u16,
    /// First grid line shown at the top of the grid area.
    pub scroll: u16,
    /// Pixels per terminal column when choosing the breakpoint.
    pub px_per_column: u32,
    tick_rate: Duration,
}

impl<S: Store> App<S> {
    /// Creates an app over a loaded tab manager.
    pub fn new(tabs: TabManager<S>, px_per_column: u32, tick_rate: Duration) -> Self {
        let mut app = Self {
            should_quit: false,
            tabs,
            selected: None,
            mode: InputMode::Normal,
            status_message: None,
            terminal_width: 80,
            scroll: 0,
            px_per_column: px_per_column.max(1),
            tick_rate,
        };
        app.reset_selection();
        app
    }

    /// Breakpoint matching the current terminal width.
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(u32::from(self.terminal_width).saturating_mul(self.px_per_column))
    }

    /// Widgets of the active tab.
    pub fn active_widgets(&self) -> &[Widget] {
        self.tabs.active_tab().map(|t| t.widgets()).unwrap_or(&[])
    }

    /// The selected widget, if any.
    pub fn selected_widget(&self) -> Option<&Widget> {
        self.selected.and_then(|i| self.active_widgets().get(i))
    }

    /// Active tab placements at the current breakpoint with bottom-anchored
    /// rows resolved, paired with the index of their widget.
    pub fn resolved_cells(&self) -> Vec<(usize, Placement)> {
        let Some(tab) = self.tabs.active_tab() else {
            return Vec::new();
        };
        let resolved = grid::resolve(tab.layouts().get(self.breakpoint()).unwrap_or(&[]));
        tab.widgets()
            .iter()
            .enumerate()
            .filter_map(|(i, w)| {
                resolved
                    .iter()
                    .find(|p| p.id == w.id)
                    .map(|p| (i, p.clone()))
            })
            .collect()
    }

    /// Selects the first widget of the active tab and scrolls to the top.
    pub fn reset_selection(&mut self) {
        self.selected = if self.active_widgets().is_empty() {
            None
        } else {
            Some(0)
        };
        self.scroll = 0;
    }

    /// Keeps the selection inside the active widget list.
    pub fn clamp_selection(&mut self) {
        let len = self.active_widgets().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    /// Selects the next widget, wrapping to the first.
    pub fn select_next(&mut self) {
        let len = self.active_widgets().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Selects the previous widget, wrapping to the last.
    pub fn select_previous(&mut self) {
        let len = self.active_widgets().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(len - 1, |i| (i + len - 1) % len));
    }

    /// Opens a text prompt pre-filled with `input`.
    pub fn open_prompt(&mut self, kind: PromptKind, input: String) {
        self.mode = InputMode::Prompt(Prompt { kind, input });
    }

    /// Shows `message` in the footer for a few seconds.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        terminal.draw(|frame| render_dashboard(frame, self))?;
        loop {
            let should_render = match event_handler.next(&mut reader).await? {
                Event::Key(key) => {
                    match handle_key_event(self, key) {
                        Action::Quit => {
                            self.should_quit = true;
                            return Ok(());
                        }
                        action => self.apply(action),
                    }
                    true
                }
                Event::Resize(width, _) => {
                    self.terminal_width = width;
                    true
                }
                Event::Tick => {
                    let had_message = self.status_message.is_some();
                    self.expire_status_message();
                    had_message && self.status_message.is_none()
                }
            };

            if should_render {
                terminal.draw(|frame| render_dashboard(frame, self))?;
            }
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}
