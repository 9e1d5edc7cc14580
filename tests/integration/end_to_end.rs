use assert_cmd::Command;
use predicates::prelude::*;

fn clamp_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clamp"))
}

#[test]
fn closed_bounds() {
    clamp_cmd().args(["3", "--lower", "2", "--upper", "5"]).assert().success().stdout("3\n");
    clamp_cmd().args(["3", "--lower", "5", "--upper", "7"]).assert().success().stdout("5\n");
    clamp_cmd().args(["3", "--lower=-10", "--upper", "1"]).assert().success().stdout("1\n");
}

#[test]
fn negative_value_and_bounds() {
    clamp_cmd()
        .args(["-20", "--lower", "-10", "--upper", "-1"])
        .assert()
        .success()
        .stdout("-10\n");
}

#[test]
fn inverted_optional_bounds_settle_on_lower() {
    clamp_cmd().args(["0", "--lower", "8", "--upper", "2"]).assert().success().stdout("8\n");
}

#[test]
fn inclusive_and_half_open_ranges() {
    clamp_cmd().args(["5", "--range", "3..=4"]).assert().success().stdout("4\n");
    clamp_cmd().args(["10", "--range", "2..5"]).assert().success().stdout("4\n");
    clamp_cmd().args(["1", "--range", "2..5"]).assert().success().stdout("2\n");
    clamp_cmd().args(["10", "--range", "..5"]).assert().success().stdout("4\n");
}

#[test]
fn empty_half_open_range_never_restricts() {
    clamp_cmd().args(["99", "--range", "4..4"]).assert().success().stdout("99\n");
}

#[test]
fn character_range() {
    clamp_cmd().args(["q", "--kind", "char", "--range", "a..=z"]).assert().success().stdout("q\n");
    clamp_cmd().args(["1", "--kind", "char", "--range", "a..=z"]).assert().success().stdout("a\n");
}

#[test]
fn absent_value_stays_absent() {
    clamp_cmd()
        .args(["--kind", "float", "--lower", "1", "--upper", "1"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn inverted_closed_range_fails() {
    clamp_cmd()
        .args(["3", "--range", "5..=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not exceed"));
}

#[test]
fn float_half_open_range_fails() {
    clamp_cmd()
        .args(["0.5", "--kind", "float", "--range", "0..1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("discrete"));
}

#[test]
fn bad_value_fails() {
    clamp_cmd()
        .args(["ab", "--kind", "char"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly one character"));
}

#[test]
fn range_conflicts_with_bounds() {
    clamp_cmd().args(["3", "--range", "1..=2", "--lower", "0"]).assert().failure();
}

#[test]
fn non_finite_floats_are_rejected() {
    clamp_cmd()
        .args(["NaN", "--kind", "float", "--lower", "0", "--upper", "1", "--format", "json"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("expected a finite number"));
    clamp_cmd()
        .args(["inf", "--kind", "float", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("finite"));
    clamp_cmd()
        .args(["0.5", "--kind", "float", "--upper", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--upper"));
}

#[test]
fn dot_char_bound_in_inclusive_range() {
    clamp_cmd().args(["!", "--kind", "char", "--range", "...=z"]).assert().success().stdout(".\n");
    clamp_cmd().args(["~", "--kind", "char", "--range", "!..=."]).assert().success().stdout(".\n");
}
