use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_clamp"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clamp"))
        .stdout(predicate::str::contains("--range"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_clamp"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unbounded_value_is_echoed() {
    Command::new(env!("CARGO_BIN_EXE_clamp"))
        .arg("42")
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn verbosity_drives_log_level() {
    Command::new(env!("CARGO_BIN_EXE_clamp"))
        .env_remove("RUST_LOG")
        .args(["10", "--range", "2..5", "-vv"])
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("resolved int request, constraint 2..5"));

    Command::new(env!("CARGO_BIN_EXE_clamp"))
        .env_remove("RUST_LOG")
        .args(["10", "--range", "2..5"])
        .assert()
        .success()
        .stderr("");
}
