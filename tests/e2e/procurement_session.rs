//! End-to-end procurement session tests.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

const VALID_SESSION: &str = "44
City of Kigali
KN 3 Rd
tenders@kigali.rw
Infrastructure
INF02
BuildCo
192837465
0733123456
Cement
9800.5 40
PO-2025-118
8750.25
Mutara Logistics
Alice Keza
Passed
Sealed bags
INV-5512
8750.25
Cement restock
";

const REPORT: &str = "\n=== PROCUREMENT MANAGEMENT DATA ===\n\
    ID: 44\n\
    Organization: City of Kigali\n\
    Address: KN 3 Rd\n\
    Contact Email: tenders@kigali.rw\n\
    Department: Infrastructure\n\
    Department Code: INF02\n\
    Supplier: BuildCo\n\
    Supplier TIN: 192837465\n\
    Contact: 0733123456\n\
    Product: Cement\n\
    Unit Price: $9800.5\n\
    Quantity: 40\n\
    PO Number: PO-2025-118\n\
    Total Amount: $8750.25\n\
    Delivered By: Mutara Logistics\n\
    Inspector: Alice Keza\n\
    Status: Passed\n\
    Remarks: Sealed bags\n\
    Invoice No: INV-5512\n\
    Invoice Amount: $8750.25\n\
    Summary: Cement restock\n\
    Total Purchase: $8750.25\n";

fn run_procurement(args: &[&str], input: &str) -> io::Result<Output> {
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
fn session_prints_the_prompts_and_the_report() -> io::Result<()> {
    let output = run_procurement(&["procurement"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=== Procurement Management System ===\nEnter ID: "));
    assert!(stdout.contains("Enter status (Passed/Failed): "));
    assert!(stdout.ends_with(REPORT));
    Ok(())
}

#[test]
fn no_progress_mode_prints_the_report_alone() -> io::Result<()> {
    let output = run_procurement(&["--no-progress", "procurement"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), REPORT);
    Ok(())
}

#[test]
fn pending_inspection_status_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("Passed", "Pending");
    let output = run_procurement(&["procurement"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid status: value must be Passed or Failed\n"
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("PROCUREMENT MANAGEMENT DATA"));
    Ok(())
}

#[test]
fn truncated_input_names_the_field_being_read() -> io::Result<()> {
    let output = run_procurement(&["procurement"], "44\nCity of Kigali\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid input: unexpected end of input while reading address\n"
    );
    Ok(())
}
