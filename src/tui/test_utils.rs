//! Shared test utilities for TUI testing with ratatui TestBackend.

#![cfg(test)]

use crate::store::{MemoryStore, Persistence};
use crate::tabs::TabManager;
use crate::tui::app::App;
use crate::tui::ui::render_dashboard;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::time::Duration;

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// App over a fresh in-memory store holding the default tab.
pub fn test_app() -> App<MemoryStore> {
    let tabs = TabManager::open(Persistence::new(MemoryStore::new()));
    App::new(tabs, 10, Duration::from_millis(250))
}

/// Renders `app` once and returns the resulting buffer.
pub fn render_app(app: &mut App<MemoryStore>, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| render_dashboard(frame, app))
        .expect("failed to draw");
    terminal.backend().buffer().clone()
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    (0..buffer.area().height).find(|&row| row_text(buffer, row).contains(text))
}
