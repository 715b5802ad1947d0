//! CLI argument parsing tests.

use crate::{Cli, Commands, ConfigAction, TabAction, WidgetAction};
use clap::{CommandFactory, Parser};
use dataeyes_dashboard::Breakpoint;
use std::path::PathBuf;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn test_bare_invocation_fails() {
    assert!(Cli::try_parse_from(["dataeyes"]).is_err());
}

#[test]
fn test_data_dir_is_global() {
    let cli = Cli::try_parse_from(["dataeyes", "widget", "list", "--data-dir", "/tmp/state"])
        .expect("valid args");
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/state")));
    assert!(matches!(
        cli.command,
        Commands::Widget {
            action: WidgetAction::List
        }
    ));
}

#[test]
fn test_data_dir_defaults_to_none() {
    let cli = Cli::try_parse_from(["dataeyes", "dump"]).expect("valid args");
    assert_eq!(cli.data_dir, None);
}

#[test]
fn test_show_breakpoint_parses_case_insensitively() {
    let cli = Cli::try_parse_from(["dataeyes", "show", "--breakpoint", "XS", "--json"])
        .expect("valid args");
    match cli.command {
        Commands::Show { breakpoint, json } => {
            assert_eq!(breakpoint, Some(Breakpoint::Xs));
            assert!(json);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_show_rejects_unknown_breakpoint() {
    assert!(Cli::try_parse_from(["dataeyes", "show", "--breakpoint", "xl"]).is_err());
}

#[test]
fn test_widget_add_requires_symbol() {
    assert!(Cli::try_parse_from(["dataeyes", "widget", "add"]).is_err());
    let cli = Cli::try_parse_from(["dataeyes", "widget", "add", "FRED:OVXCLS"])
        .expect("valid args");
    match cli.command {
        Commands::Widget {
            action: WidgetAction::Add { symbol },
        } => assert_eq!(symbol, "FRED:OVXCLS"),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_tab_rename_takes_id_and_name() {
    let cli = Cli::try_parse_from(["dataeyes", "tab", "rename", "tab-1", "Metals"])
        .expect("valid args");
    match cli.command {
        Commands::Tab {
            action: TabAction::Rename { id, name },
        } => {
            assert_eq!(id, "tab-1");
            assert_eq!(name, "Metals");
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_embed_html_flag_default_false() {
    let cli = Cli::try_parse_from(["dataeyes", "embed", "NASDAQ:SDEX"]).expect("valid args");
    match cli.command {
        Commands::Embed { symbol, html } => {
            assert_eq!(symbol, "NASDAQ:SDEX");
            assert!(!html);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_config_init_force_flag() {
    let cli = Cli::try_parse_from(["dataeyes", "config", "init", "--force"]).expect("valid args");
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Init { force: true }
        }
    ));
}
