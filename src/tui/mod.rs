//! Terminal UI for the dashboard.
//!
//! Draws the active tab's widgets as boxes on the grid of the breakpoint that
//! matches the terminal width, and turns key presses into widget and tab
//! edits.

pub mod app;
pub mod event;
pub mod grid;
pub mod ui;

mod test_utils;

pub use app::App;
