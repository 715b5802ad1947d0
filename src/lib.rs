//! DataEyes dashboard library
//!
//! State engine for a grid dashboard of financial charts. Each panel
//! embeds a third-party chart for one ticker symbol; this crate owns which
//! panels exist, where they sit on the grid at every responsive breakpoint,
//! and how that state is saved and restored.
//!
//! Two front ends share the same core:
//! - [`Dashboard`]: a single widget set (the `items` / `layouts-v2` keys).
//! - [`TabManager`]: named tabs, each with its own widget set (the `tabs` /
//!   `active-tab` keys). The CLI and TUI use this one.
//!
//! Storage is injected through the [`store::Store`] trait.

/// TOML configuration loading and XDG paths.
pub mod config;

/// Single widget-set dashboard.
pub mod dashboard;

/// Chart embed configuration.
pub mod embed;

/// Breakpoints, placements and layout generation.
pub mod layout;

/// Tracing subscriber setup.
pub mod logging;

/// Persistence port and backends.
pub mod store;

/// Multi-tab dashboard.
pub mod tabs;

/// Terminal user interface.
pub mod tui;

/// Widgets and the widget set editor.
pub mod widgets;

pub use dashboard::Dashboard;
pub use embed::ChartEmbed;
pub use layout::{Breakpoint, LayoutSet, Placement};
pub use store::{FileStore, MemoryStore, Persistence, Store};
pub use tabs::{Tab, TabError, TabManager};
pub use widgets::{Widget, WidgetSet};
