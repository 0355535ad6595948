//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("LEGIBILITY_LOG_LEVEL")
        .env_remove("LEGIBILITY_MAX_INPUT_BYTES")
        .env_remove("LEGIBILITY_SETTINGS__EXPORT_FORMAT");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    info_json_with(cmd(), dir)
}

fn info_json_with(mut command: Command, dir: &std::path::Path) -> Value {
    let output = command
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".legibility.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("legibility.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("legibility.toml"),
        "should report regular config: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.toml"), r#"log_level = "error""#).unwrap();
    let nested = tmp.path().join("docs").join("chapters");
    fs::create_dir_all(&nested).unwrap();

    let json = info_json(&nested);
    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("legibility.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Config Formats
// =============================================================================

#[test]
fn parses_toml_settings() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.toml"),
        "max_input_bytes = 2048\n\n[settings]\nexport_format = \"csv\"\nword_cloud_min_freq = 5\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["max_input_bytes"], 2048);
    assert_eq!(json["config"]["settings"]["export_format"], "csv");
    assert_eq!(json["config"]["settings"]["word_cloud_min_freq"], 5);
    assert_eq!(
        json["config"]["settings"]["word_cloud_max_words"], 50,
        "unset settings keep their defaults"
    );
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.yaml"),
        "log_level: debug\nsettings:\n  show_advanced_metrics: false\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "debug");
    assert_eq!(json["config"]["settings"]["show_advanced_metrics"], false);
}

#[test]
fn parses_yml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.yml"), "log_level: warn\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.json"),
        r#"{"log_level": "error", "settings": {"export_format": "txt"}}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert_eq!(
        json["config"]["settings"]["export_format"], "text",
        "txt is accepted as an alias"
    );
}

#[test]
fn disable_input_limit_reports_unlimited() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.toml"),
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.toml"), r#"log_level = "error""#).unwrap();
    let child = tmp.path().join("child");
    fs::create_dir(&child).unwrap();
    fs::write(child.join(".legibility.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&child);
    assert_eq!(json["config"]["log_level"], "debug");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.toml"), r#"log_level = "debug""#).unwrap();
    let explicit = tmp.path().join("custom.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let mut command = cmd();
    command.args(["--config", explicit.to_str().unwrap()]);
    let json = info_json_with(command, tmp.path());

    assert_eq!(json["config"]["log_level"], "error");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("custom.toml"), "{reported}");
}

#[test]
fn environment_overrides_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.toml"),
        "log_level = \"debug\"\n[settings]\nexport_format = \"csv\"\n",
    )
    .unwrap();

    let mut command = cmd();
    command
        .env("LEGIBILITY_LOG_LEVEL", "warn")
        .env("LEGIBILITY_SETTINGS__EXPORT_FORMAT", "text");
    let json = info_json_with(command, tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["settings"]["export_format"], "text");
}

#[test]
fn configured_export_format_drives_score() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.toml"),
        "[settings]\nexport_format = \"csv\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("a.txt"), "The cat sat on the mat.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Metric,Value\n"));
}

#[test]
fn configured_word_list_is_used() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("familiar.txt"), "zebra\n").unwrap();
    fs::write(
        tmp.path().join(".legibility.toml"),
        "word_list = \"familiar.txt\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("a.txt"), "zebra zebra zebra cat.").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "a.txt", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metrics"]["difficult_words"], 1);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.toml"), "log_level = [unclosed").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn invalid_yaml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.yaml"), "log_level: [unclosed").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_export_format_in_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.toml"),
        "[settings]\nexport_format = \"pdf\"\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legibility.toml"),
        "log_level = \"warn\"\nsome_future_option = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Boundary Marker
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legibility.toml"), r#"log_level = "error""#).unwrap();
    let repo = tmp.path().join("repo");
    let nested = repo.join("src");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&nested);
    assert_eq!(
        json["config"]["log_level"], "info",
        "config above the repository root should not be loaded"
    );
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    fs::write(tmp.path().join(".legibility.toml"), r#"log_level = "debug""#).unwrap();
    let nested = tmp.path().join("docs");
    fs::create_dir(&nested).unwrap();

    let json = info_json(&nested);
    assert_eq!(json["config"]["log_level"], "debug");
}
