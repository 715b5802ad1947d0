//! Widget commands on the active tab.

use std::process::ExitCode;

use dataeyes_dashboard::{Store, TabManager};

use super::active_tab;

/// Adds a widget for `symbol` and prints its id.
pub(crate) fn run_widget_add<S: Store>(tabs: &mut TabManager<S>, symbol: &str) -> ExitCode {
    let Some(tab_id) = active_tab(tabs).map(|t| t.id.clone()) else {
        return ExitCode::FAILURE;
    };
    match tabs.add_widget(&tab_id, symbol) {
        Ok(id) => {
            println!("{id}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Removes widget `id`.
pub(crate) fn run_widget_remove<S: Store>(tabs: &mut TabManager<S>, id: &str) -> ExitCode {
    let Some(tab_id) = active_tab(tabs).map(|t| t.id.clone()) else {
        return ExitCode::FAILURE;
    };
    if tabs.remove_widget(&tab_id, id) {
        println!("Removed {id}");
        ExitCode::SUCCESS
    } else {
        eprintln!("Error: no widget with id '{id}'");
        ExitCode::FAILURE
    }
}

/// Prints `<id>\t<symbol>` per widget.
pub(crate) fn run_widget_list<S: Store>(tabs: &TabManager<S>) -> ExitCode {
    let Some(tab) = active_tab(tabs) else {
        return ExitCode::FAILURE;
    };
    for widget in tab.widgets() {
        println!("{}\t{}", widget.id, widget.symbol);
    }
    ExitCode::SUCCESS
}

/// Restores the default widgets of the active tab.
pub(crate) fn run_reset_command<S: Store>(tabs: &mut TabManager<S>) -> ExitCode {
    let Some((tab_id, name)) = active_tab(tabs).map(|t| (t.id.clone(), t.name.clone())) else {
        return ExitCode::FAILURE;
    };
    tabs.reset_tab(&tab_id);
    println!("Reset {name} to the default widgets");
    ExitCode::SUCCESS
}
