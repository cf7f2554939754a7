use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn geoscriber_cmd() -> Command {
    Command::cargo_bin("geoscriber").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    geoscriber_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive map annotation: draw and title zones on a map",
        ));
}

#[test]
fn version_prints_package_version() {
    geoscriber_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_non_numeric_zoom() {
    geoscriber_cmd()
        .args(["--zoom", "high"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn broken_config_file_aborts_startup() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("geoscriber");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "not valid = = toml").unwrap();

    geoscriber_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
