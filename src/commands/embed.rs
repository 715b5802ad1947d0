//! Chart embed output.

use std::process::ExitCode;

use dataeyes_dashboard::config::Config;
use dataeyes_dashboard::ChartEmbed;

/// Prints the embed config JSON (or HTML with `html`) for `symbol`.
pub(crate) fn run_embed_command(symbol: &str, config: &Config, html: bool) -> ExitCode {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        eprintln!("Error: symbol must not be empty");
        return ExitCode::FAILURE;
    }
    let embed = ChartEmbed::new(symbol, &config.chart);
    let output = if html {
        embed.to_html()
    } else {
        embed.config_json()
    };
    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to build embed: {e}");
            ExitCode::FAILURE
        }
    }
}
