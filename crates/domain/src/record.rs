//! The base record group shared by all six programs.

use chrono::{Local, NaiveDate};
use regdesk_shared::{FieldError, Validate};
use serde::Serialize;

/// Identifier plus the two stamp dates every record starts with.
///
/// The dates are never read from the console; they are filled with the
/// current local date when the record is built.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct RecordCore {
    /// Record identifier, strictly positive.
    #[validate(range(min = 1))]
    pub id: i32,
    /// Date the record was created.
    pub created_date: NaiveDate,
    /// Date the record was last updated. Identical to `created_date` for
    /// these single-shot programs.
    pub updated_date: NaiveDate,
}

impl RecordCore {
    /// Build the base group, stamping both dates with the current local date.
    pub fn new(id: i32) -> Result<Self, FieldError> {
        let today = Local::now().date_naive();
        let core = Self {
            id,
            created_date: today,
            updated_date: today,
        };
        core.validate()?;
        Ok(core)
    }
}
