//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const REPORTS: &str = "test-data/reports.json";
const EMPTY: &str = "test-data/empty.json";
const MALFORMED: &str = "test-data/malformed.json";

fn folders_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_report-folders"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn root_lists_folders_then_reports() {
    let mut cmd = folders_cmd();
    cmd.arg("--input").arg(REPORTS).arg("--quiet");
    cmd.assert().success().stdout(
        "hello\t/folder/hello\n\
         folder with spaces\t/folder/folder with spaces\n\
         test\t/folder/test\n\
         sample\t/folder/sample\n\
         report\t/result_listing/report\n",
    );
}

#[test]
fn url_path_with_encoded_spaces() {
    let mut cmd = folders_cmd();
    cmd.arg("/folder/test/my%20fake%20folder/hello")
        .arg("--input")
        .arg(REPORTS)
        .arg("--quiet");
    cmd.assert().success().stdout(
        "report\t/result_listing/test/my fake folder/hello/report\n\
         plot_random\t/result_listing/test/my fake folder/hello/plot_random\n",
    );
}

#[test]
fn bare_folder_argument() {
    let mut cmd = folders_cmd();
    cmd.arg("test/my fake folder")
        .arg("--input")
        .arg(REPORTS)
        .arg("--quiet");
    cmd.assert().success().stdout(
        "hello\t/folder/test/my fake folder/hello\n\
         summary\t/result_listing/test/my fake folder/summary\n",
    );
}

#[test]
fn console_output_shows_breadcrumbs_and_counts() {
    let mut cmd = folders_cmd();
    cmd.arg("/folder/test").arg("--input").arg(REPORTS);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Start › test"))
        .stdout(predicate::str::contains("my fake folder"))
        .stdout(predicate::str::contains("(3 reports)"));
}

#[test]
fn no_color_flag_strips_escape_codes() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_report-folders"));
    cmd.env("CLICOLOR_FORCE", "1")
        .arg("--no-color")
        .arg("--input")
        .arg(REPORTS);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[cfg(feature = "http")]
#[test]
fn unreachable_server_exit_1() {
    let mut cmd = folders_cmd();
    cmd.arg("--server").arg("http://127.0.0.1:9").arg("--quiet");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to load reports"));
}

#[test]
fn display_key_is_not_used_as_path() {
    let mut cmd = folders_cmd();
    cmd.arg("/folder/sample").arg("--input").arg(REPORTS).arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("slideshow_test\t/result_listing/sample/slideshow_test"))
        .stdout(predicate::str::contains("Slideshow").not());
}

#[test]
fn json_output_valid() {
    let mut cmd = folders_cmd();
    cmd.arg("/folder/test/my%20fake%20folder/hello")
        .arg("--input")
        .arg(REPORTS)
        .arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(value["state"], "loaded");
    assert_eq!(value["currentFolder"], "test/my fake folder/hello/");
    assert_eq!(value["breadcrumbs"][2]["href"], "/folder/test/my fake folder");
    assert_eq!(value["breadcrumbs"][2]["label"], "my fake folder");
    assert_eq!(value["cards"][0]["label"], "report");
}

#[test]
fn html_output_to_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("index.html");
    let mut cmd = folders_cmd();
    cmd.arg("--input")
        .arg(REPORTS)
        .arg("--html")
        .arg("--output")
        .arg(&out);
    cmd.assert().success();
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("href=\"/result_listing/report\""));
    assert!(html.contains("href=\"/folder/hello\""));
    assert!(html.contains("id=\"failedLoad\" style=\"display:none\""));
}

#[test]
fn json_and_html_conflict() {
    let mut cmd = folders_cmd();
    cmd.arg("--input").arg(REPORTS).arg("--json").arg("--html");
    cmd.assert().failure().code(2);
}

#[test]
fn empty_response_exit_1() {
    let mut cmd = folders_cmd();
    cmd.arg("--input").arg(EMPTY);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to load reports"));
}

#[test]
fn malformed_response_exit_1() {
    let mut cmd = folders_cmd();
    cmd.arg("--input").arg(MALFORMED).arg("--json");
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["state"], "failed");
}

#[test]
fn missing_input_file_exit_1() {
    let mut cmd = folders_cmd();
    cmd.arg("--input").arg("test-data/nonexistent.json").arg("--html");
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("<div class=\"ui negative message\" id=\"failedLoad\">"));
}

#[test]
fn missing_config_exit_2() {
    let mut cmd = folders_cmd();
    cmd.arg("--input")
        .arg(REPORTS)
        .arg("--config")
        .arg("nope.json");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn config_hide_patterns_apply() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("cfg.json");
    fs::write(&config_path, r#"{ "hide": ["test/**", "hello/*"] }"#).unwrap();
    let mut cmd = folders_cmd();
    cmd.arg("--input")
        .arg(REPORTS)
        .arg("--config")
        .arg(&config_path)
        .arg("--quiet");
    cmd.assert().success().stdout(
        "folder with spaces\t/folder/folder with spaces\n\
         sample\t/folder/sample\n\
         report\t/result_listing/report\n",
    );
}

#[test]
fn config_format_is_default_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("cfg.json");
    fs::write(&config_path, r#"{ "format": "json" }"#).unwrap();

    let mut cmd = folders_cmd();
    cmd.arg("--input").arg(REPORTS).arg("--config").arg(&config_path);
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let _: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("valid JSON");
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".reportfoldersrc.json");
    let mut cmd = folders_cmd();
    cmd.arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--server")
        .arg("http://reports.internal:11828");
    cmd.assert().success();
    assert!(config_path.exists(), ".reportfoldersrc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("http://reports.internal:11828"));
    assert!(content.contains("hide"));
}

#[test]
fn init_does_not_overwrite() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".reportfoldersrc.json");
    fs::write(&config_path, "{}").unwrap();
    let mut cmd = folders_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "{}");
}
