//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.
//! Key presses are translated to [`Action`]s; the app applies them.

use crate::store::Store;
use crate::tui::app::{App, InputMode, PromptKind};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Move the selected widget by columns and grid units.
    Move { dx: i32, dy: i32 },
    /// Resize the selected widget by columns and grid units.
    Resize { dw: i32, dh: i32 },
    /// Add a widget with this symbol to the active tab.
    AddWidget(String),
    /// Delete the selected widget.
    DeleteWidget,
    /// Reset the active tab to the default widgets.
    ResetTab,
    /// Create a new tab.
    NewTab,
    /// Remove the active tab.
    RemoveTab,
    /// Rename the active tab.
    RenameTab(String),
    /// Activate the previous tab.
    PrevTab,
    /// Activate the next tab.
    NextTab,
}

/// Handles a key event, editing the selection or prompt in place and
/// returning the state change to apply, if any.
pub fn handle_key_event<S: Store>(app: &mut App<S>, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Action::Quit;
    }

    if let InputMode::Prompt(_) = app.mode {
        return handle_prompt_key(app, key);
    }

    let step = crate::tui::grid::UNITS_PER_LINE as i32;
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab | KeyCode::Char('j') => {
            app.select_next();
            Action::None
        }
        KeyCode::BackTab | KeyCode::Char('k') => {
            app.select_previous();
            Action::None
        }
        KeyCode::Left if shift => Action::Resize { dw: -1, dh: 0 },
        KeyCode::Right if shift => Action::Resize { dw: 1, dh: 0 },
        KeyCode::Up if shift => Action::Resize { dw: 0, dh: -step },
        KeyCode::Down if shift => Action::Resize { dw: 0, dh: step },
        KeyCode::Left => Action::Move { dx: -1, dy: 0 },
        KeyCode::Right => Action::Move { dx: 1, dy: 0 },
        KeyCode::Up => Action::Move { dx: 0, dy: -step },
        KeyCode::Down => Action::Move { dx: 0, dy: step },
        KeyCode::Char('a') => {
            if app.tabs.active_id().is_some() {
                app.open_prompt(PromptKind::AddWidget, String::new());
            }
            Action::None
        }
        KeyCode::Char('n') => {
            if let Some(tab) = app.tabs.active_tab() {
                let current = tab.name.clone();
                app.open_prompt(PromptKind::RenameTab, current);
            }
            Action::None
        }
        KeyCode::Char('d') => Action::DeleteWidget,
        KeyCode::Char('R') => Action::ResetTab,
        KeyCode::Char('t') => Action::NewTab,
        KeyCode::Char('x') => Action::RemoveTab,
        KeyCode::Char('[') => Action::PrevTab,
        KeyCode::Char(']') => Action::NextTab,
        KeyCode::Esc => {
            app.selected = None;
            Action::None
        }
        _ => Action::None,
    }
}

/// Handles key events while a text prompt is open.
fn handle_prompt_key<S: Store>(app: &mut App<S>, key: KeyEvent) -> Action {
    let InputMode::Prompt(prompt) = &mut app.mode else {
        return Action::None;
    };
    match key.code {
        KeyCode::Esc => {
            app.mode = InputMode::Normal;
            Action::None
        }
        KeyCode::Enter => {
            let kind = prompt.kind;
            let input = std::mem::take(&mut prompt.input);
            app.mode = InputMode::Normal;
            match kind {
                PromptKind::AddWidget => Action::AddWidget(input),
                PromptKind::RenameTab => Action::RenameTab(input),
            }
        }
        KeyCode::Backspace => {
            prompt.input.pop();
            Action::None
        }
        KeyCode::Char(c) => {
            prompt.input.push(c);
            Action::None
        }
        _ => Action::None,
    }
}
