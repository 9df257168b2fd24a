//! End-to-end flight booking session tests.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

const VALID_SESSION: &str = "7
Kigali International
KGL
Kigali
RwandAir
WB
ops@rwandair.com
WB-101
Kigali
Nairobi
1000
Aline Uwase
LIC-889
5
Eric Mugisha
Attendant
Day
Chantal Iradukunda
29
Female
0788442211
12A
Economy
Card
1150
TK-0099
";

const PROMPTS: &str = "Enter ID: \
    Enter airport name: \
    Enter airport code (3 uppercase letters): \
    Enter location: \
    Enter airline name: \
    Enter airline code (2-4 letters): \
    Enter contact email: \
    Enter flight number: \
    Enter departure: \
    Enter destination: \
    Enter base fare: \
    Enter pilot name: \
    Enter license number: \
    Enter experience years: \
    Enter crew name: \
    Enter role: \
    Enter shift (Day/Night): \
    Enter passenger name: \
    Enter age: \
    Enter gender (Male/Female): \
    Enter contact: \
    Enter seat number: \
    Enter travel class (Economy/Business/First): \
    Enter payment method: \
    Enter amount paid: \
    Enter ticket number: ";

const REPORT: &str = "\n=== FLIGHT BOOKING DATA ===\n\
    ID: 7\n\
    Airport: Kigali International\n\
    Airport Code: KGL\n\
    Location: Kigali\n\
    Airline: RwandAir\n\
    Airline Code: WB\n\
    Contact Email: ops@rwandair.com\n\
    Flight Number: WB-101\n\
    Departure: Kigali\n\
    Destination: Nairobi\n\
    Base Fare: $1000.0\n\
    Pilot: Aline Uwase\n\
    License: LIC-889\n\
    Experience: 5 years\n\
    Crew: Eric Mugisha\n\
    Role: Attendant\n\
    Shift: Day\n\
    Passenger: Chantal Iradukunda\n\
    Age: 29\n\
    Gender: Female\n\
    Contact: 0788442211\n\
    Seat: 12A\n\
    Class: Economy\n\
    Payment Method: Card\n\
    Amount Paid: $1150.0\n\
    Ticket Number: TK-0099\n\
    Final Fare: $1150.0\n";

fn run_flight(args: &[&str], input: &str) -> io::Result<Output> {
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
fn session_prints_every_prompt_and_the_full_report() -> io::Result<()> {
    let output = run_flight(&["flight"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!("=== Flight Booking System ===\n{PROMPTS}{REPORT}");
    assert_eq!(stdout, expected);
    Ok(())
}

#[test]
fn agent_mode_emits_json_with_no_prompts() -> io::Result<()> {
    let output = run_flight(&["--agent", "flight"], VALID_SESSION)?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter "));

    let value: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|error| io::Error::other(error.to_string()))?;
    assert_eq!(value["finalFare"], 1150.0);
    assert_eq!(value["record"]["airport"]["airportName"], "Kigali International");
    assert_eq!(value["record"]["crew"]["shift"], "Day");
    Ok(())
}

#[test]
fn lowercase_airport_code_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("KGL", "ab1");
    let output = run_flight(&["flight"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid code: value must be 3 uppercase letters\n"
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("FLIGHT BOOKING DATA"));
    Ok(())
}

#[test]
fn morning_shift_exits_with_a_validation_error() -> io::Result<()> {
    let script = VALID_SESSION.replace("Day", "Morning");
    let output = run_flight(&["flight"], &script)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid shift: value must be Day or Night\n"
    );
    Ok(())
}

#[test]
fn non_numeric_id_reports_the_expected_kind() -> io::Result<()> {
    let output = run_flight(&["flight"], "oops\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid input: expected a whole number for id\n"
    );
    Ok(())
}

#[test]
fn truncated_input_names_the_field_being_read() -> io::Result<()> {
    let output = run_flight(&["flight"], "7\nKigali International\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: invalid input: unexpected end of input while reading code\n"
    );
    Ok(())
}
