//! End-to-end tax administration session tests.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

const VALID_SESSION: &str = "12
Rwanda Revenue Authority
Kigali
info@rra.gov.rw
PAYE
0.3
TX-PAYE
123456789
Claude Niyonsenga
KG 11 Ave
Acme Ltd
987654321
0788000111
Eric Habimana
500000
456789123
July
520000 100000 95000
RCP-88
100000
";

fn run_tax(args: &[&str], input: &str) -> io::Result<Output> {
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
fn session_prints_the_report_with_the_computed_liability() -> io::Result<()> {
    let output = run_tax(&["tax"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=== Tax Administration System ===\nEnter ID: "));
    assert!(stdout.contains("Enter taxpayer TIN (9 digits): "));
    assert!(stdout.contains("\nRate: 0.3\n"));
    assert!(stdout.contains("\nSalary: $500000.0\n"));
    assert!(stdout.ends_with("Total Tax: $100000.0\nComputed Tax: $100000.0\n"));
    Ok(())
}

#[test]
fn computed_liability_goes_negative_when_the_credit_exceeds_it() -> io::Result<()> {
    let script = VALID_SESSION.replace("500000", "100000");
    let output = run_tax(&["tax"], &script)?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with("Computed Tax: $-20000.0\n"));
    Ok(())
}

#[test]
fn agent_mode_emits_json_with_no_prompts() -> io::Result<()> {
    let output = run_tax(&["--agent", "tax"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter "));

    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|error| io::Error::other(error.to_string()))?;
    assert_eq!(value["computedTax"], 100_000.0);
    assert_eq!(value["record"]["category"]["rate"], 0.3);
    assert_eq!(value["record"]["taxpayer"]["tin"], "123456789");
    Ok(())
}

#[test]
fn eight_digit_taxpayer_tin_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("123456789", "12345678");
    let output = run_tax(&["tax"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid tin: value must be exactly 9 digits\n"
    );
    Ok(())
}

#[test]
fn non_numeric_rate_reports_the_expected_kind() -> io::Result<()> {
    let output = run_tax(
        &["tax"],
        "12\nRwanda Revenue Authority\nKigali\ninfo@rra.gov.rw\nPAYE\nheavy\n",
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid input: expected a number for rate\n"
    );
    Ok(())
}
