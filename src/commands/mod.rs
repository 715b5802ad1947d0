//! Command implementations for the dataeyes CLI.
//!
//! Organized by domain:
//! - `show` - Read-only views of saved state (show, dump)
//! - `widget` - Widget edits on the active tab (add, remove, list, reset)
//! - `tab` - Tab management (list, add, remove, rename, select)
//! - `embed` - Chart embed output
//! - `tui` - Terminal UI launcher

pub(crate) mod embed;
pub(crate) mod show;
pub(crate) mod tab;
pub(crate) mod tui;
pub(crate) mod widget;

pub(crate) use embed::*;
pub(crate) use show::*;
pub(crate) use tab::*;
pub(crate) use tui::*;
pub(crate) use widget::*;

use dataeyes_dashboard::{Store, Tab, TabManager};

/// The active tab, or an error message on stderr when there is none.
fn active_tab<S: Store>(tabs: &TabManager<S>) -> Option<&Tab> {
    let tab = tabs.active_tab();
    if tab.is_none() {
        eprintln!("Error: no active tab (create one with `dataeyes tab add`)");
    }
    tab
}
