use assert_cmd::Command;

fn json_for(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_clamp"))
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn json_int_report() {
    let json = json_for(&["10", "--range", "2..5"]);
    assert_eq!(json["kind"], "int");
    assert_eq!(json["input"], 10);
    assert_eq!(json["output"], 4);
    assert_eq!(json["constraint"], "2..5");
}

#[test]
fn json_float_report() {
    let json = json_for(&["7.5", "--kind", "float", "--range", "0..=1"]);
    assert_eq!(json["kind"], "float");
    assert_eq!(json["output"], 1.0);
    assert_eq!(json["constraint"], "0..=1");
}

#[test]
fn json_char_report() {
    let json = json_for(&["1", "--kind", "char", "--lower", "a"]);
    assert_eq!(json["output"], "a");
    assert_eq!(json["constraint"], "a..");
}

#[test]
fn json_absent_value() {
    let json = json_for(&["--lower", "1"]);
    assert!(json["input"].is_null());
    assert!(json["output"].is_null());
}

#[test]
fn json_null_only_for_absent_float() {
    let json = json_for(&["1e300", "--kind", "float", "--upper", "2.5"]);
    assert_eq!(json["input"], 1e300);
    assert_eq!(json["output"], 2.5);
}
