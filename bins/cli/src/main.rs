//! Interactive record-entry CLI entrypoint.
//!
//! One subcommand per program; each runs a prompt/read session over stdio,
//! validates the record at construction, and prints the report. `main` owns
//! the single error-reporting point and the exit-code mapping.

mod commands;
mod console;
mod error;
mod format;

use clap::{Parser, Subcommand};
use commands::{run_attendance, run_flight, run_payroll, run_procurement, run_stock, run_tax};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "regdesk",
    version,
    about = "Interactive consoles for six record-entry programs",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Capture one flight booking record.
    Flight,
    /// Capture one stock management record.
    Stock,
    /// Capture one tax administration record.
    Tax,
    /// Capture one procurement record.
    Procurement,
    /// Capture one attendance record.
    Attendance,
    /// Capture one payroll record.
    Payroll,
}

pub(crate) struct CliOutput {
    stdout: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing();
    let mode = OutputMode::from_args(&cli.output);

    match run(&cli.command, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: &Commands, mode: OutputMode) -> Result<CliOutput, CliError> {
    match command {
        Commands::Flight => run_flight(mode),
        Commands::Stock => run_stock(mode),
        Commands::Tax => run_tax(mode),
        Commands::Procurement => run_procurement(mode),
        Commands::Attendance => run_attendance(mode),
        Commands::Payroll => run_payroll(mode),
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    debug!(error = %error, "session failed");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}
