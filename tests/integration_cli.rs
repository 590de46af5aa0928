//! CLIのエンドツーエンドテスト
//!
//! 実際のバイナリを起動し、終了コードと出力を検証する。
//! gitを呼ぶ前に完結するシナリオだけを対象にする。

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gitp() -> Command {
    Command::cargo_bin("gitp").unwrap()
}

/// 最小構成のレジストリファイルを書き出すヘルパー
fn write_minimal_registry(dir: &std::path::Path) {
    let json = r#"{
  "repos": [
    {
      "name": "x",
      "remotes": {
        "origin": { "ssh": "git@example.com:me/x.git", "https": "" },
        "second": { "ssh": "", "https": "" }
      },
      "enabled": true
    }
  ],
  "comments": { "default": "update" },
  "user": { "name": "", "email": "" }
}"#;
    std::fs::write(dir.join("gitp_config.json"), json).unwrap();
}

#[test]
fn test_version_flag_prints_version_and_exits_zero() {
    gitp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    gitp()
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"))
        .stdout(predicate::str::contains("usage:"))
        .stdout(predicate::str::contains("gitp remote add"))
        .stdout(predicate::str::contains("gitp [repository name] [every git command]"));
}

#[test]
fn test_remote_without_add_is_invalid() {
    gitp()
        .args(["remote", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"))
        .stdout(predicate::str::contains("usage:"));
}

#[test]
fn test_all_flag_without_command_is_invalid() {
    gitp()
        .arg("-a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn test_repo_name_without_command_is_invalid() {
    gitp()
        .arg("some-repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn test_init_creates_registry_scaffold() {
    let temp_dir = TempDir::new().unwrap();

    gitp().current_dir(temp_dir.path()).arg("init").assert().success();

    let raw = std::fs::read_to_string(temp_dir.path().join("gitp_config.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let repos = value["repos"].as_array().unwrap();
    assert_eq!(repos.len(), 2);
    for repo in repos {
        assert_eq!(repo["enabled"], serde_json::Value::Bool(false));
        assert_eq!(repo["name"], serde_json::Value::String(String::new()));
    }
    // 2スペースインデントの整形済みJSONであること
    assert!(raw.contains("  \"repos\""));
}

#[test]
fn test_init_twice_fails_with_already_exists() {
    let temp_dir = TempDir::new().unwrap();

    gitp().current_dir(temp_dir.path()).arg("init").assert().success();
    gitp()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_clone_of_unknown_repo_is_silent() {
    let temp_dir = TempDir::new().unwrap();
    write_minimal_registry(temp_dir.path());

    gitp()
        .current_dir(temp_dir.path())
        .args(["clone", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_passthrough_on_missing_directory_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    write_minimal_registry(temp_dir.path());

    gitp()
        .current_dir(temp_dir.path())
        .args(["x", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("x not found"));
}

#[test]
fn test_missing_registry_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    gitp()
        .current_dir(temp_dir.path())
        .arg("pull")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
