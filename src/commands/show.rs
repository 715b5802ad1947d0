//! Read-only views of the saved dashboard.

use std::process::ExitCode;

use dataeyes_dashboard::layout::Placement;
use dataeyes_dashboard::{Breakpoint, Store, Tab, TabManager};
use serde_json::{json, Map, Value};

use super::active_tab;

/// Prints the active tab's widgets and their placements.
///
/// Without `breakpoint` every stored breakpoint is shown, including names
/// this version does not know.
pub(crate) fn run_show_command<S: Store>(
    tabs: &TabManager<S>,
    breakpoint: Option<Breakpoint>,
    json: bool,
) -> ExitCode {
    let Some(tab) = active_tab(tabs) else {
        return ExitCode::FAILURE;
    };
    let sections: Vec<(&str, &[Placement])> = match breakpoint {
        Some(bp) => vec![(bp.name(), tab.layouts().get(bp).unwrap_or(&[]))],
        None => tab.layouts().iter().collect(),
    };

    if json {
        let layouts: Map<String, Value> = sections
            .iter()
            .map(|(name, placements)| ((*name).to_string(), json!(placements)))
            .collect();
        let value = json!({
            "id": tab.id,
            "name": tab.name,
            "widgets": tab.widgets(),
            "layouts": layouts,
        });
        return print_json(&value);
    }

    println!("{} ({})", tab.name, tab.id);
    for (name, placements) in sections {
        match name.parse::<Breakpoint>() {
            Ok(bp) => println!("{name} ({} cols)", bp.columns()),
            Err(_) => println!("{name}"),
        }
        for p in placements {
            let symbol = tab
                .set
                .widget(&p.id)
                .map(|w| w.symbol.as_str())
                .unwrap_or("?");
            println!("  {:<20} {:<20} {}", p.id, symbol, describe(p));
        }
    }
    ExitCode::SUCCESS
}

fn describe(p: &Placement) -> String {
    let y = if p.is_at_bottom() {
        "bottom".to_string()
    } else {
        p.y.to_string()
    };
    format!("x {:<3} y {:<6} w {:<3} h {}", p.x, y, p.w, p.h)
}

/// Prints every tab plus the active tab id as JSON.
pub(crate) fn run_dump_command<S: Store>(tabs: &TabManager<S>) -> ExitCode {
    let value = json!({
        "active_tab": tabs.active_id(),
        "tabs": tabs.tabs().iter().map(tab_json).collect::<Vec<_>>(),
    });
    print_json(&value)
}

fn tab_json(tab: &Tab) -> Value {
    json!({
        "id": tab.id,
        "name": tab.name,
        "widgets": tab.widgets(),
        "layouts": tab.layouts(),
    })
}

fn print_json(value: &Value) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize state: {e}");
            ExitCode::FAILURE
        }
    }
}
