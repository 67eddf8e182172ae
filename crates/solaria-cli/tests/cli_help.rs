use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("solaria")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("feed"))
        .stdout(predicate::str::contains("headline"))
        .stdout(predicate::str::contains("subscribe"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_help_shows_motion_flags() {
    cargo_bin_cmd!("solaria")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("skip-boot"))
        .stdout(predicate::str::contains("reduced-motion"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("solaria")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("solaria")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_config_path_honors_solaria_home() {
    let dir = tempfile::TempDir::new().unwrap();
    cargo_bin_cmd!("solaria")
        .args(["config", "path"])
        .env("SOLARIA_HOME", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}
