//! Tab management commands.

use std::process::ExitCode;

use dataeyes_dashboard::{Store, TabManager};

/// Prints one line per tab, `*` marking the active one.
pub(crate) fn run_tab_list<S: Store>(tabs: &TabManager<S>) -> ExitCode {
    let active = tabs.active_id();
    for tab in tabs.tabs() {
        let marker = if Some(tab.id.as_str()) == active { '*' } else { ' ' };
        println!(
            "{marker} {}\t{}\t{} widgets",
            tab.id,
            tab.name,
            tab.widgets().len()
        );
    }
    ExitCode::SUCCESS
}

/// Creates a tab and prints `<id>\t<name>`.
pub(crate) fn run_tab_add<S: Store>(tabs: &mut TabManager<S>) -> ExitCode {
    let id = tabs.add_tab();
    let name = tabs.tab(&id).map(|t| t.name.as_str()).unwrap_or_default();
    println!("{id}\t{name}");
    ExitCode::SUCCESS
}

pub(crate) fn run_tab_remove<S: Store>(tabs: &mut TabManager<S>, id: &str) -> ExitCode {
    if tabs.remove_tab(id) {
        println!("Removed tab {id}");
        ExitCode::SUCCESS
    } else {
        unknown_tab(id)
    }
}

pub(crate) fn run_tab_rename<S: Store>(tabs: &mut TabManager<S>, id: &str, name: &str) -> ExitCode {
    if tabs.tab(id).is_none() {
        return unknown_tab(id);
    }
    if !tabs.rename_tab(id, name) {
        eprintln!("Error: tab name must not be empty");
        return ExitCode::FAILURE;
    }
    println!("Renamed tab {id} to {}", name.trim());
    ExitCode::SUCCESS
}

pub(crate) fn run_tab_select<S: Store>(tabs: &mut TabManager<S>, id: &str) -> ExitCode {
    if tabs.select_tab(id) {
        println!("Selected tab {id}");
        ExitCode::SUCCESS
    } else {
        unknown_tab(id)
    }
}

fn unknown_tab(id: &str) -> ExitCode {
    eprintln!("Error: no tab with id '{id}'");
    ExitCode::FAILURE
}
