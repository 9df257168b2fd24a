//! Closed-set field enums.
//!
//! Each enum accepts exactly the literal spellings the console programs
//! document in their prompts; anything else is a validation failure naming
//! the offending field.

use regdesk_shared::{FieldError, ValidationError};
use serde::Serialize;
use std::fmt;

/// Crew shift assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shift {
    /// Day shift.
    Day,
    /// Night shift.
    Night,
}

impl Shift {
    /// Parse a shift from its exact console spelling.
    pub fn parse(field: &'static str, input: &str) -> Result<Self, FieldError> {
        match input {
            "Day" => Ok(Self::Day),
            "Night" => Ok(Self::Night),
            _ => Err(FieldError::invalid(field, "value must be Day or Night")),
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Passenger gender as recorded on the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    /// Recorded as `Male`.
    Male,
    /// Recorded as `Female`.
    Female,
}

impl Gender {
    /// Parse a gender value from its exact console spelling.
    pub fn parse(field: &'static str, input: &str) -> Result<Self, FieldError> {
        match input {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            _ => Err(FieldError::invalid(field, "value must be Male or Female")),
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Booking travel class. Non-economy classes carry a fare discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TravelClass {
    /// Economy cabin.
    Economy,
    /// Business cabin.
    Business,
    /// First cabin.
    First,
}

impl TravelClass {
    /// Parse a travel class from its exact console spelling.
    pub fn parse(field: &'static str, input: &str) -> Result<Self, FieldError> {
        match input {
            "Economy" => Ok(Self::Economy),
            "Business" => Ok(Self::Business),
            "First" => Ok(Self::First),
            _ => Err(FieldError::invalid(
                field,
                "value must be Economy, Business, or First",
            )),
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Business => "Business",
            Self::First => "First",
        }
    }
}

impl fmt::Display for TravelClass {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Outcome of a procurement inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InspectionStatus {
    /// Goods passed inspection.
    Passed,
    /// Goods failed inspection.
    Failed,
}

impl InspectionStatus {
    /// Parse an inspection status from its exact console spelling.
    pub fn parse(field: &'static str, input: &str) -> Result<Self, FieldError> {
        match input {
            "Passed" => Ok(Self::Passed),
            "Failed" => Ok(Self::Failed),
            _ => Err(FieldError::invalid(field, "value must be Passed or Failed")),
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Per-session attendance mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    /// Student attended the session.
    Present,
    /// Student missed the session.
    Absent,
}

impl AttendanceStatus {
    /// Parse an attendance status from its exact console spelling.
    pub fn parse(field: &'static str, input: &str) -> Result<Self, FieldError> {
        match input {
            "Present" => Ok(Self::Present),
            "Absent" => Ok(Self::Absent),
            _ => Err(FieldError::invalid(
                field,
                "value must be Present or Absent",
            )),
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
