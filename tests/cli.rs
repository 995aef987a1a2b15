use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "aayu";

#[test]
/// Help should display usage information and the dwell flag.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("--splash-delay-ms"))
        .stdout(contains("--no-color"));
}

#[test]
/// Version should report the package version.
fn cli_version_displays_package_version() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
/// A non-numeric dwell should be rejected by argument parsing.
fn cli_rejects_non_numeric_splash_delay() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--splash-delay-ms", "soon"]);
    cmd.assert().failure().stderr(contains("invalid value"));
}

#[test]
/// Unknown flags should be rejected.
fn cli_rejects_unknown_flag() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--frobnicate");
    cmd.assert().failure().stderr(contains("unexpected argument"));
}
