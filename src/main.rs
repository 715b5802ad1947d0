//! DataEyes dashboard - CLI entry point
//!
//! Inspects and edits the saved dashboard (tabs, widgets, layouts) and
//! launches the terminal UI.

mod commands;

#[cfg(test)]
mod cli_tests;

use clap::{Parser, Subcommand};
use dataeyes_dashboard::config::{default, xdg, Config, ConfigLoader};
use dataeyes_dashboard::layout::Breakpoint;
use dataeyes_dashboard::{logging, FileStore, Persistence, TabManager};
use std::path::PathBuf;
use std::process::ExitCode;

/// File the TUI logs to, inside the data directory.
const TUI_LOG_FILE: &str = "dataeyes.log";

/// DataEyes financial chart dashboard
#[derive(Parser)]
#[command(name = "dataeyes")]
#[command(version, about = "Grid dashboard of financial charts")]
struct Cli {
    /// Directory holding saved dashboard state (overrides `storage.dir`)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dataeyes CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal user interface
    Tui,

    /// Show the active tab's widgets and placements
    Show {
        /// Only show this breakpoint (lg, md, sm, xs, xxs)
        #[arg(long)]
        breakpoint: Option<Breakpoint>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage widgets of the active tab
    Widget {
        #[command(subcommand)]
        action: WidgetAction,
    },

    /// Restore the active tab's default widgets and layout
    Reset,

    /// Manage tabs
    Tab {
        #[command(subcommand)]
        action: TabAction,
    },

    /// Print the chart embed for a symbol
    Embed {
        /// Ticker symbol, e.g. FRED:OVXCLS
        symbol: String,
        /// Print an HTML snippet instead of the JSON config
        #[arg(long)]
        html: bool,
    },

    /// Dump all saved tabs as JSON
    Dump,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `widget` subcommand.
#[derive(Subcommand)]
enum WidgetAction {
    /// Add a chart widget for a symbol
    Add {
        /// Ticker symbol, e.g. BINANCE:BTCUSDT
        symbol: String,
    },
    /// Remove a widget by id
    Remove {
        /// Widget id as shown by `widget list`
        id: String,
    },
    /// List widgets
    List,
}

/// Actions for the `tab` subcommand.
#[derive(Subcommand)]
enum TabAction {
    /// List tabs, marking the active one
    List,
    /// Create an empty tab and make it active
    Add,
    /// Remove a tab
    Remove {
        /// Tab id
        id: String,
    },
    /// Rename a tab
    Rename {
        /// Tab id
        id: String,
        /// New display name
        name: String,
    },
    /// Make a tab active
    Select {
        /// Tab id
        id: String,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Config { action } = cli.command {
        return run_config_command(action);
    }

    let config = match ConfigLoader::load_default().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.resolved_dir());

    if matches!(cli.command, Commands::Tui) {
        if let Err(e) = logging::init_to_file(config.log.level, &data_dir.join(TUI_LOG_FILE)) {
            eprintln!("Warning: file logging disabled: {e}");
        }
    } else {
        logging::init(config.log.level);
    }
    tracing::debug!("using data directory {}", data_dir.display());

    let persistence = Persistence::with_namespace(
        FileStore::new(&data_dir),
        config.storage.namespace.clone(),
    );

    match cli.command {
        Commands::Tui => commands::run_tui(TabManager::open(persistence), &config),
        Commands::Show { breakpoint, json } => {
            commands::run_show_command(&TabManager::open(persistence), breakpoint, json)
        }
        Commands::Widget { action } => {
            let mut tabs = TabManager::open(persistence);
            match action {
                WidgetAction::Add { symbol } => commands::run_widget_add(&mut tabs, &symbol),
                WidgetAction::Remove { id } => commands::run_widget_remove(&mut tabs, &id),
                WidgetAction::List => commands::run_widget_list(&tabs),
            }
        }
        Commands::Reset => commands::run_reset_command(&mut TabManager::open(persistence)),
        Commands::Tab { action } => {
            let mut tabs = TabManager::open(persistence);
            match action {
                TabAction::List => commands::run_tab_list(&tabs),
                TabAction::Add => commands::run_tab_add(&mut tabs),
                TabAction::Remove { id } => commands::run_tab_remove(&mut tabs, &id),
                TabAction::Rename { id, name } => commands::run_tab_rename(&mut tabs, &id, &name),
                TabAction::Select { id } => commands::run_tab_select(&mut tabs, &id),
            }
        }
        Commands::Embed { symbol, html } => commands::run_embed_command(&symbol, &config, html),
        Commands::Dump => commands::run_dump_command(&TabManager::open(persistence)),
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}

/// Handles `config init|path|validate`.
fn run_config_command(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate => ConfigLoader::load_default()
            .and_then(|config: Config| config.validate().map(|_| config))
            .map(|config| {
                println!("Configuration is valid");
                println!("{config:#?}");
            }),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}
