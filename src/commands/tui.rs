//! Terminal UI launcher.

use std::process::ExitCode;

use dataeyes_dashboard::config::Config;
use dataeyes_dashboard::tui::App;
use dataeyes_dashboard::{Store, TabManager};

/// Runs the TUI on a tokio runtime until the user quits.
pub(crate) fn run_tui<S: Store>(tabs: TabManager<S>, config: &Config) -> ExitCode {
    let tick_rate = match config.tui.tick_rate() {
        Ok(rate) => rate,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime for TUI: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = App::new(tabs, config.tui.px_per_column, tick_rate);
    if let Err(e) = rt.block_on(app.run()) {
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
