//! End-to-end stock management session tests.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

const VALID_SESSION: &str = "31
Gikondo Depot
Kigali
0788123456
Electronics
ELC01
Volt Traders
sales@volt.rw
0722334455
LED Panel
450.5 200 120 40 60 30
Jean Bosco
120 54000
Quarterly check
";

const REPORT_LINE: &str = "Stock Report - Total Items: 120, Stock Value: $54000.0, Sales: 30";

fn run_stock(args: &[&str], input: &str) -> io::Result<Output> {
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
fn session_prints_the_report_and_the_derived_summary() -> io::Result<()> {
    let output = run_stock(&["stock"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=== Stock Management System ===\nEnter ID: Enter warehouse name: "));
    assert!(stdout.contains("Enter unit price: Enter stock limit: "));
    assert!(stdout.contains("\nUnit Price: $450.5\n"));
    assert!(stdout.ends_with(&format!("Remarks: Quarterly check\n\n{REPORT_LINE}\n")));
    Ok(())
}

#[test]
fn agent_mode_emits_json_with_no_prompts() -> io::Result<()> {
    let output = run_stock(&["--agent", "stock"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter "));

    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|error| io::Error::other(error.to_string()))?;
    assert_eq!(value["stockReport"], REPORT_LINE);
    assert_eq!(value["record"]["product"]["unitPrice"], 450.5);
    assert_eq!(value["record"]["sale"]["soldQuantity"], 30);
    Ok(())
}

#[test]
fn short_contact_number_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("0788123456", "078812345");
    let output = run_stock(&["stock"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid contactNumber: value must be exactly 10 digits\n"
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("STOCK MANAGEMENT DATA"));
    Ok(())
}

#[test]
fn non_numeric_quantity_reports_the_expected_kind() -> io::Result<()> {
    let script = VALID_SESSION.replace("450.5 200 120 40 60 30", "450.5 200 many 40 60 30");
    let output = run_stock(&["stock"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid input: expected a whole number for quantityAvailable\n"
    );
    Ok(())
}
