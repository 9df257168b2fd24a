//! Flight booking session.

use crate::CliOutput;
use crate::console::Console;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use regdesk_domain::{FlightBooking, FlightInput, amount};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the interactive flight booking session on stdio.
pub fn run_flight(mode: OutputMode) -> Result<CliOutput, CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), mode.no_progress);
    session(&mut console, mode)
}

fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    info!(program = "flight", "session started");
    console.banner("=== Flight Booking System ===")?;

    let input = FlightInput {
        id: console.read_i32("Enter ID: ", "id")?,
        airport_name: console.read_line("Enter airport name: ", "airportName")?,
        code: console.read_line("Enter airport code (3 uppercase letters): ", "code")?,
        location: console.read_line("Enter location: ", "location")?,
        airline_name: console.read_line("Enter airline name: ", "airlineName")?,
        airline_code: console.read_line("Enter airline code (2-4 letters): ", "airlineCode")?,
        contact_email: console.read_line("Enter contact email: ", "contactEmail")?,
        flight_number: console.read_line("Enter flight number: ", "flightNumber")?,
        departure: console.read_line("Enter departure: ", "departure")?,
        destination: console.read_line("Enter destination: ", "destination")?,
        base_fare: console.read_f64("Enter base fare: ", "baseFare")?,
        pilot_name: console.read_line("Enter pilot name: ", "pilotName")?,
        license_number: console.read_line("Enter license number: ", "licenseNumber")?,
        experience_years: console.read_i32("Enter experience years: ", "experienceYears")?,
        crew_name: console.read_line("Enter crew name: ", "crewName")?,
        role: console.read_line("Enter role: ", "role")?,
        shift: console.read_line("Enter shift (Day/Night): ", "shift")?,
        passenger_name: console.read_line("Enter passenger name: ", "passengerName")?,
        age: console.read_i32("Enter age: ", "age")?,
        gender: console.read_line("Enter gender (Male/Female): ", "gender")?,
        contact: console.read_line("Enter contact: ", "contact")?,
        seat_number: console.read_line("Enter seat number: ", "seatNumber")?,
        travel_class: console.read_line(
            "Enter travel class (Economy/Business/First): ",
            "travelClass",
        )?,
        payment_method: console.read_line("Enter payment method: ", "paymentMethod")?,
        amount_paid: console.read_f64("Enter amount paid: ", "amountPaid")?,
        ticket_number: console.read_line("Enter ticket number: ", "ticketNumber")?,
    };

    let record = FlightBooking::try_from(input)?;
    info!(program = "flight", id = record.core.id, "record accepted");

    let stdout = if mode.is_json() {
        render_json(&record)?
    } else {
        render_text(&record)
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

fn render_text(record: &FlightBooking) -> String {
    format!(
        "\n=== FLIGHT BOOKING DATA ===\n\
         ID: {}\n\
         Airport: {}\n\
         Airport Code: {}\n\
         Location: {}\n\
         Airline: {}\n\
         Airline Code: {}\n\
         Contact Email: {}\n\
         Flight Number: {}\n\
         Departure: {}\n\
         Destination: {}\n\
         Base Fare: ${}\n\
         Pilot: {}\n\
         License: {}\n\
         Experience: {} years\n\
         Crew: {}\n\
         Role: {}\n\
         Shift: {}\n\
         Passenger: {}\n\
         Age: {}\n\
         Gender: {}\n\
         Contact: {}\n\
         Seat: {}\n\
         Class: {}\n\
         Payment Method: {}\n\
         Amount Paid: ${}\n\
         Ticket Number: {}\n\
         Final Fare: ${}\n",
        record.core.id,
        record.airport.airport_name,
        record.airport.code,
        record.airport.location,
        record.airline.airline_name,
        record.airline.airline_code,
        record.airline.contact_email,
        record.leg.flight_number,
        record.leg.departure,
        record.leg.destination,
        amount::render(record.leg.base_fare),
        record.pilot.pilot_name,
        record.pilot.license_number,
        record.pilot.experience_years,
        record.crew.crew_name,
        record.crew.role,
        record.crew.shift,
        record.passenger.passenger_name,
        record.passenger.age,
        record.passenger.gender,
        record.passenger.contact,
        record.booking.seat_number,
        record.booking.travel_class,
        record.payment.payment_method,
        amount::render(record.payment.amount_paid),
        record.ticket.ticket_number,
        amount::render(record.final_fare()),
    )
}

fn render_json(record: &FlightBooking) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "record": serde_json::to_value(record)?,
        "finalFare": record.final_fare(),
    });
    let mut out = serde_json::to_string_pretty(&payload)?;
    out.push('\n');
    Ok(out)
}
