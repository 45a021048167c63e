use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

fn run_ok(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("mailgate")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_ok_json(args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("mailgate")
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn run_rejected(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("mailgate")
        .args(args)
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3), "unexpected exit: {:?}", output);
    String::from_utf8(output.stderr).expect("utf8")
}

#[test]
fn verify_accepts_expected_credentials() {
    let stdout = run_ok(&["verify", "test@gmail.com", "12345"]);
    assert!(stdout.contains("verification successful"));
}

#[test]
fn verify_json_reports_normalized_email() {
    let value = run_ok_json(&["verify", "  Test@GMAIL.com ", "12345"]);
    assert_eq!(value["email"], "test@gmail.com");
    assert_eq!(value["message"], "verification successful, welcome!");
}

#[test]
fn verify_rejects_short_password() {
    let stderr = run_rejected(&["verify", "test@gmail.com", "123"]);
    assert!(stderr.contains("password must exceed 4 characters"));
}

#[test]
fn verify_rejects_wrong_password() {
    let stderr = run_rejected(&["verify", "test@gmail.com", "99999"]);
    assert!(stderr.contains("incorrect password"));
}

#[test]
fn verify_reports_email_failure_before_password() {
    let stderr = run_rejected(&["verify", "bad-email", "12345"]);
    assert!(stderr.contains("invalid format"));
}

#[test]
fn check_email_prints_normalized_address() {
    let stdout = run_ok(&["check-email", "  User@GMAIL.com "]);
    assert_eq!(stdout.trim(), "user@gmail.com");
}

#[test]
fn check_email_rejects_other_domains() {
    let stderr = run_rejected(&["check-email", "user@example.com"]);
    assert!(stderr.contains("must be a gmail.com address"));
}

#[test]
fn check_email_rejects_short_local_part() {
    let stderr = run_rejected(&["check-email", "ab@gmail.com"]);
    assert!(stderr.contains("local part too short"));
}
