//! Integration tests for the `dataeyes` binary.
//!
//! Each test points the binary at a fresh data directory and an empty
//! config directory, runs a sequence of commands, and checks what was
//! printed and what was saved.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_dataeyes");

/// Isolated config and data directories for one test.
struct Env {
    config: TempDir,
    data: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            config: tempfile::tempdir().expect("failed to create config dir"),
            data: tempfile::tempdir().expect("failed to create data dir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(BIN);
        cmd.env("XDG_CONFIG_HOME", self.config.path())
            .env_remove("DATAEYES_LOG")
            .arg("--data-dir")
            .arg(self.data.path());
        cmd
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("failed to run");
        assert!(output.status.success(), "{args:?} failed: {output:?}");
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn dump(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout(&["dump"])).expect("dump is JSON")
    }

    fn data_file(&self, key: &str) -> std::path::PathBuf {
        self.data.path().join(format!("dataeyes-dashboard-{key}.json"))
    }
}

fn active_tab_id(env: &Env) -> String {
    env.dump()["active_tab"]
        .as_str()
        .expect("active tab present")
        .to_string()
}

#[test]
fn test_fresh_start_lists_default_widgets() {
    let env = Env::new();
    env.cmd()
        .args(["widget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ovx\tFRED:OVXCLS"))
        .stdout(predicate::str::contains("gvz\tFRED:GVZCLS"))
        .stdout(predicate::str::contains("skew\tNASDAQ:SDEX"));
    assert!(
        !env.data_file("tabs").exists(),
        "reading must not write state"
    );
}

#[test]
fn test_widget_add_persists_across_runs() {
    let env = Env::new();
    let id = env.stdout(&["widget", "add", "BINANCE:BTCUSDT"]);
    let id = id.trim();
    assert!(id.starts_with("widget-"), "unexpected id {id}");

    env.cmd()
        .args(["widget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{id}\tBINANCE:BTCUSDT")));

    let saved = std::fs::read_to_string(env.data_file("tabs")).expect("tabs saved");
    assert!(saved.contains(id));
}

#[test]
fn test_appended_widget_shows_bottom_row() {
    let env = Env::new();
    env.stdout(&["widget", "add", "X:Y"]);
    let value: serde_json::Value =
        serde_json::from_str(&env.stdout(&["show", "--breakpoint", "lg", "--json"]))
            .expect("show is JSON");
    let placements = value["layouts"]["lg"].as_array().expect("lg placements");
    assert_eq!(placements.len(), 4);
    assert_eq!(placements[3]["x"], 30);
    assert!(placements[3]["y"].is_null(), "bottom row is saved as null");
    assert!(value["layouts"].get("md").is_none());
}

#[test]
fn test_widget_add_rejects_blank_symbol() {
    let env = Env::new();
    env.cmd()
        .args(["widget", "add", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("symbol must not be empty"));
}

#[test]
fn test_widget_remove_and_reset() {
    let env = Env::new();
    env.cmd()
        .args(["widget", "remove", "gvz"])
        .assert()
        .success();
    env.cmd()
        .args(["widget", "remove", "gvz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no widget"));
    env.cmd()
        .args(["widget", "list"])
        .assert()
        .stdout(predicate::str::contains("gvz").not());

    env.cmd().arg("reset").assert().success();
    env.cmd()
        .args(["widget", "list"])
        .assert()
        .stdout(predicate::str::contains("gvz\tFRED:GVZCLS"));
}

#[test]
fn test_tab_lifecycle() {
    let env = Env::new();
    let added = env.stdout(&["tab", "add"]);
    let (second, name) = added.trim().split_once('\t').expect("id and name");
    assert_eq!(name, "Dashboard 2");
    assert_eq!(active_tab_id(&env), second);
    let first = env.dump()["tabs"][0]["id"]
        .as_str()
        .expect("default tab saved")
        .to_string();
    assert_ne!(first, second);

    env.cmd()
        .args(["tab", "rename", second, "Metals"])
        .assert()
        .success();
    env.cmd()
        .args(["tab", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("* {second}\tMetals\t0 widgets")));

    env.cmd()
        .args(["tab", "select", &first])
        .assert()
        .success();
    assert_eq!(active_tab_id(&env), first);

    env.cmd()
        .args(["tab", "remove", &first])
        .assert()
        .success();
    assert_eq!(active_tab_id(&env), second);
}

#[test]
fn test_listed_default_tab_can_be_renamed_in_next_run() {
    let env = Env::new();
    let listed = env.stdout(&["tab", "list"]);
    let line = listed.lines().next().expect("one tab listed");
    let id = line
        .trim_start_matches(['*', ' '])
        .split('\t')
        .next()
        .expect("tab id column")
        .to_string();
    assert!(
        !env.data_file("tabs").exists(),
        "listing must not write state"
    );

    std::thread::sleep(std::time::Duration::from_millis(20));
    env.cmd()
        .args(["tab", "rename", &id, "Metals"])
        .assert()
        .success();
    env.cmd()
        .args(["tab", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("* {id}\tMetals\t3 widgets")));
}

#[test]
fn test_unknown_tab_ids_fail() {
    let env = Env::new();
    for args in [
        vec!["tab", "select", "nope"],
        vec!["tab", "remove", "nope"],
        vec!["tab", "rename", "nope", "Name"],
    ] {
        env.cmd()
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("no tab with id 'nope'"));
    }
}

#[test]
fn test_removing_last_tab_leaves_no_active_tab() {
    let env = Env::new();
    let only = active_tab_id(&env);
    env.cmd()
        .args(["tab", "remove", &only])
        .assert()
        .success();
    assert!(env.dump()["active_tab"].is_null());
    env.cmd()
        .args(["widget", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active tab"));
}

#[test]
fn test_malformed_saved_tabs_fall_back_to_default() {
    let env = Env::new();
    std::fs::write(env.data_file("tabs"), "{ not json").expect("write corrupt state");
    env.cmd()
        .args(["widget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ovx\tFRED:OVXCLS"))
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_saved_orphan_placements_are_dropped() {
    let env = Env::new();
    let tabs = serde_json::json!([{
        "id": "t1",
        "name": "Vol",
        "widgets": [{"i": "ovx", "symbol": "FRED:OVXCLS"}],
        "layouts": {
            "lg": [
                {"i": "ovx", "x": 0, "y": 0, "w": 30, "h": 20},
                {"i": "zzz", "x": 30, "y": 0, "w": 30, "h": 20}
            ],
            "xl": [{"i": "zzz", "x": 0, "y": 0, "w": 10, "h": 20}]
        }
    }]);
    std::fs::write(env.data_file("tabs"), tabs.to_string()).expect("write state");
    let dump = env.dump();
    let layouts = &dump["tabs"][0]["layouts"];
    assert_eq!(layouts["lg"].as_array().map(Vec::len), Some(1));
    assert_eq!(layouts["xl"].as_array().map(Vec::len), Some(0));
    assert_eq!(layouts["xxs"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_embed_prints_config() {
    let env = Env::new();
    let value: serde_json::Value =
        serde_json::from_str(&env.stdout(&["embed", "FRED:OVXCLS"])).expect("embed is JSON");
    assert_eq!(value["container_id"], "tradingview-widget-FRED_OVXCLS");
    assert_eq!(value["locale"], "zh_CN");

    env.cmd()
        .args(["embed", "FRED:OVXCLS", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<div id=\"tradingview-widget-FRED_OVXCLS\"",
        ));
}

#[test]
fn test_embed_uses_chart_config() {
    let env = Env::new();
    let dir = env.config.path().join("dataeyes-dashboard");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("config.toml"), "[chart]\ntheme = \"light\"\n").expect("write config");
    env.cmd()
        .args(["embed", "X:Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"theme\": \"light\""));
}

#[test]
fn test_storage_namespace_from_config() {
    let env = Env::new();
    let dir = env.config.path().join("dataeyes-dashboard");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("config.toml"), "[storage]\nnamespace = \"alt-\"\n")
        .expect("write config");
    env.cmd().args(["tab", "add"]).assert().success();
    assert!(env.data.path().join("alt-tabs.json").exists());
    assert!(!env.data_file("tabs").exists());
}

#[test]
fn test_invalid_config_is_reported() {
    let env = Env::new();
    let dir = env.config.path().join("dataeyes-dashboard");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("config.toml"), "[tui]\ntick_rate = \"soon\"\n").expect("write config");
    env.cmd()
        .arg("dump")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_config_init_path_validate() {
    let env = Env::new();
    let expected = env.config.path().join("dataeyes-dashboard/config.toml");
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
    env.cmd().args(["config", "init"]).assert().success();
    assert!(Path::new(&expected).exists());
    env.cmd()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    env.cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
