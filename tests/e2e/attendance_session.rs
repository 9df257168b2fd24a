//! End-to-end attendance session tests.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

const VALID_SESSION: &str = "5
University of Kigali
UOK
KG 200 St
Computer Science
Dr. Uwimana
Data Structures
CS204
10
Prof. Karenzi
karenzi@uok.rw
0781112233
Ange Mugenzi
STU-2024-17
21
Trees
SES-09
Present
Medical
true
18 2
";

fn run_attendance(args: &[&str], input: &str) -> io::Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_regdesk"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    child.wait_with_output()
}

#[test]
fn session_prints_the_report_with_the_percentage() -> io::Result<()> {
    let output = run_attendance(&["attendance"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=== Attendance Management System ===\nEnter ID: "));
    assert!(stdout.contains("Is leave approved (true/false): "));
    assert!(stdout.contains("\nStudent ID: STU-2024-17\n"));
    assert!(stdout.ends_with("Total Present: 18\nTotal Absent: 2\nAttendance Percentage: 90.0%\n"));
    Ok(())
}

#[test]
fn zero_session_counts_render_zero_percent() -> io::Result<()> {
    let script = VALID_SESSION.replace("18 2", "0 0");
    let output = run_attendance(&["attendance"], &script)?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with("Attendance Percentage: 0.0%\n"));
    Ok(())
}

#[test]
fn approval_flag_is_read_case_insensitively() -> io::Result<()> {
    let script = VALID_SESSION.replace("true", "TRUE");
    let output = run_attendance(&["attendance"], &script)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\nApproved: true\n"));
    Ok(())
}

#[test]
fn agent_mode_emits_json_with_no_prompts() -> io::Result<()> {
    let output = run_attendance(&["--agent", "attendance"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter "));

    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|error| io::Error::other(error.to_string()))?;
    assert_eq!(value["attendancePercentage"], 90.0);
    assert_eq!(value["record"]["leave"]["approved"], true);
    assert_eq!(value["record"]["summary"]["totalPresent"], 18);
    Ok(())
}

#[test]
fn late_status_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("Present", "Late");
    let output = run_attendance(&["attendance"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid status: value must be Present or Absent\n"
    );
    Ok(())
}
