//! Buffered prompt/read engine shared by the six program sessions.
//!
//! The console keeps one buffered input line and a cursor. Token reads skip
//! whitespace (consuming further lines as needed) and leave any remainder
//! buffered, so consecutive numeric fields may share one input line. Line
//! reads discard the buffered remainder and take a fresh line, so a string
//! field never picks up leftovers from a preceding token.

use crate::error::CliError;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Input shape failure produced while reading one field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    /// A token was present but did not parse as the expected kind.
    #[error("expected {expected} for {field}")]
    Shape {
        /// Reported field name.
        field: &'static str,
        /// Expected token kind.
        expected: &'static str,
    },
    /// Input ended before the field could be read.
    #[error("unexpected end of input while reading {field}")]
    EndOfInput {
        /// Reported field name.
        field: &'static str,
    },
}

/// Prompt/read driver over an input stream and a prompt stream.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    quiet: bool,
    line: String,
    cursor: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console; `quiet` suppresses prompts and banners.
    pub fn new(reader: R, writer: W, quiet: bool) -> Self {
        Self {
            reader,
            writer,
            quiet,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Print the program banner line.
    pub fn banner(&mut self, text: &str) -> Result<(), CliError> {
        if !self.quiet {
            writeln!(self.writer, "{text}")?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), CliError> {
        if !self.quiet {
            write!(self.writer, "{text}")?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn fill(&mut self, field: &'static str) -> Result<(), CliError> {
        self.line.clear();
        self.cursor = 0;
        let read = self.reader.read_line(&mut self.line)?;
        if read == 0 {
            return Err(ConsoleError::EndOfInput { field }.into());
        }
        Ok(())
    }

    fn token_bounds(&self) -> Option<(usize, usize)> {
        let rest = self.line.get(self.cursor..)?;
        let offset = rest.find(|c: char| !c.is_whitespace())?;
        let start = self.cursor + offset;
        let token = self.line.get(start..)?;
        let length = token.find(char::is_whitespace).unwrap_or(token.len());
        Some((start, start + length))
    }

    fn next_token(&mut self, field: &'static str) -> Result<String, CliError> {
        loop {
            if let Some((start, end)) = self.token_bounds() {
                self.cursor = end;
                return Ok(self.line.get(start..end).unwrap_or_default().to_string());
            }
            self.fill(field)?;
        }
    }

    /// Prompt for and read one full line, discarding any buffered remainder.
    pub fn read_line(&mut self, prompt: &str, field: &'static str) -> Result<String, CliError> {
        self.prompt(prompt)?;
        self.fill(field)?;
        let text = self.line.trim_end_matches(['\r', '\n']).to_string();
        self.cursor = self.line.len();
        Ok(text)
    }

    /// Prompt for and read one whole-number token.
    pub fn read_i32(&mut self, prompt: &str, field: &'static str) -> Result<i32, CliError> {
        self.prompt(prompt)?;
        let token = self.next_token(field)?;
        token.parse().map_err(|_| {
            ConsoleError::Shape {
                field,
                expected: "a whole number",
            }
            .into()
        })
    }

    /// Prompt for and read one numeric token.
    pub fn read_f64(&mut self, prompt: &str, field: &'static str) -> Result<f64, CliError> {
        self.prompt(prompt)?;
        let token = self.next_token(field)?;
        token.parse().map_err(|_| {
            ConsoleError::Shape {
                field,
                expected: "a number",
            }
            .into()
        })
    }

    /// Prompt for and read one boolean token, matching case-insensitively.
    pub fn read_bool(&mut self, prompt: &str, field: &'static str) -> Result<bool, CliError> {
        self.prompt(prompt)?;
        let token = self.next_token(field)?;
        if token.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if token.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConsoleError::Shape {
                field,
                expected: "true or false",
            }
            .into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, reason = "parsed tokens are exact for these inputs")]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<&str>, Vec<u8>> {
        Console::new(Cursor::new(input), Vec::new(), false)
    }

    fn error_text(result: Result<impl std::fmt::Debug, CliError>) -> Option<String> {
        result.err().map(|error| error.to_string())
    }

    #[test]
    fn tokens_share_one_line() -> Result<(), CliError> {
        let mut console = console("100 2500.5\n");
        assert_eq!(console.read_i32("a: ", "a")?, 100);
        assert_eq!(console.read_f64("b: ", "b")?, 2500.5);
        Ok(())
    }

    #[test]
    fn token_reads_skip_blank_lines() -> Result<(), CliError> {
        let mut console = console("\n   \n  7\n");
        assert_eq!(console.read_i32("id: ", "id")?, 7);
        Ok(())
    }

    #[test]
    fn line_read_discards_the_buffered_remainder() -> Result<(), CliError> {
        let mut console = console("5 leftovers\nGikondo Depot\n");
        assert_eq!(console.read_i32("id: ", "id")?, 5);
        assert_eq!(
            console.read_line("name: ", "warehouseName")?,
            "Gikondo Depot"
        );
        Ok(())
    }

    #[test]
    fn line_read_keeps_interior_whitespace_and_drops_the_newline() -> Result<(), CliError> {
        let mut console = console("  KG 11 Ave \r\n");
        assert_eq!(console.read_line("addr: ", "address")?, "  KG 11 Ave ");
        Ok(())
    }

    #[test]
    fn shape_errors_name_the_field_and_kind() {
        assert_eq!(
            error_text(console("pineapple\n").read_i32("id: ", "id")),
            Some("invalid input: expected a whole number for id".to_string())
        );
        assert_eq!(
            error_text(console("12x\n").read_f64("fare: ", "baseFare")),
            Some("invalid input: expected a number for baseFare".to_string())
        );
        assert_eq!(
            error_text(console("yes\n").read_bool("ok: ", "approved")),
            Some("invalid input: expected true or false for approved".to_string())
        );
    }

    #[test]
    fn end_of_input_names_the_field_being_read() {
        assert_eq!(
            error_text(console("").read_line("remarks: ", "remarks")),
            Some("invalid input: unexpected end of input while reading remarks".to_string())
        );
        assert_eq!(
            error_text(console("   \n").read_i32("id: ", "id")),
            Some("invalid input: unexpected end of input while reading id".to_string())
        );
    }

    #[test]
    fn boolean_tokens_match_case_insensitively() -> Result<(), CliError> {
        let mut console = console("TRUE False\n");
        assert!(console.read_bool("a: ", "approved")?);
        assert!(!console.read_bool("b: ", "rssbRegistered")?);
        Ok(())
    }

    #[test]
    fn prompts_are_written_in_order_and_silenced_when_quiet() -> Result<(), CliError> {
        let mut loud = console("1 2\n");
        loud.read_i32("Enter ID: ", "id")?;
        loud.read_i32("Enter age: ", "age")?;
        assert_eq!(String::from_utf8_lossy(&loud.writer), "Enter ID: Enter age: ");

        let mut quiet = Console::new(Cursor::new("1\n"), Vec::new(), true);
        quiet.read_i32("Enter ID: ", "id")?;
        quiet.banner("=== Flight Booking System ===")?;
        assert!(quiet.writer.is_empty());
        Ok(())
    }
}
