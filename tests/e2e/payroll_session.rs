//! End-to-end payroll session tests.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

const VALID_SESSION: &str = "3
Acme Ltd
ACM
12345678
hr@acme.rw
Engineering
ENG
Grace Ingabire
1042
Diane Umutoni
Engineer
250000
true 7 2025
200000
30000
40000
10000
52500
5000
10
2000
15000
350000
50000
300000
PSL-2025-07
";

const PAYSLIP: &str =
    "PAYSLIP - Employee: Diane Umutoni, RSSB: $10000.00, PAYE: $52500.00, Net: $300000.00";

fn run_payroll(args: &[&str], input: &str) -> io::Result<Output> {
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
fn session_prints_the_report_and_the_payslip() -> io::Result<()> {
    let output = run_payroll(&["payroll"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=== Payroll Management System (RSSB) ===\nEnter ID: "));
    assert!(stdout.contains("Enter employee ID (>=1000): "));
    assert!(stdout.contains("\nRSSB Registered: true\n"));
    assert!(stdout.contains("\nOvertime Hours: 10.0\n"));
    assert!(stdout.ends_with(&format!("Payslip Number: PSL-2025-07\n\n{PAYSLIP}\n")));
    Ok(())
}

#[test]
fn agent_mode_emits_json_with_no_prompts() -> io::Result<()> {
    let output = run_payroll(&["--agent", "payroll"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter "));

    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|error| io::Error::other(error.to_string()))?;
    assert_eq!(value["payslip"], PAYSLIP);
    assert_eq!(value["record"]["employee"]["employeeID"], 1042);
    assert_eq!(value["record"]["period"]["month"], 7);
    Ok(())
}

#[test]
fn three_digit_employee_id_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("1042", "999");
    let output = run_payroll(&["payroll"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid employeeID: value must be at least 1000\n"
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("PAYROLL MANAGEMENT DATA"));
    Ok(())
}

#[test]
fn thirteenth_month_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("true 7 2025", "true 13 2025");
    let output = run_payroll(&["payroll"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid month: value must be between 1 and 12\n"
    );
    Ok(())
}

#[test]
fn non_boolean_registration_reports_the_expected_kind() -> io::Result<()> {
    let script = VALID_SESSION.replace("true 7 2025", "yes 7 2025");
    let output = run_payroll(&["payroll"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid input: expected true or false for rssbRegistered\n"
    );
    Ok(())
}
