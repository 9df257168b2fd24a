//! # regdesk-domain
//!
//! Record layers and derived-value formulas for the six regdesk programs.
//!
//! This crate contains the data model with no I/O dependencies:
//!
//! - **Rules** - shared field validation functions (digit strings, codes,
//!   email, amount bounds)
//! - **Fields** - closed-set field enums (`Shift`, `Gender`, `TravelClass`,
//!   `InspectionStatus`, `AttendanceStatus`)
//! - **Record** - the `RecordCore` group (id plus stamp dates) shared by
//!   every program
//! - **Programs** - one module per program (`flight`, `stock`, `tax`,
//!   `procurement`, `attendance`, `payroll`), each with its layer groups,
//!   input set, terminal record, and derived value
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` and the validate derive
//! - No console or rendering dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod amount;
pub mod attendance;
pub mod fields;
pub mod flight;
pub mod payroll;
pub mod procurement;
pub mod record;
pub mod rules;
pub mod stock;
pub mod tax;

pub use attendance::{AttendanceInput, AttendanceRecord};
pub use record::RecordCore;
pub use fields::{AttendanceStatus, Gender, InspectionStatus, Shift, TravelClass};
pub use flight::{FlightBooking, FlightInput};
pub use payroll::{PayrollInput, PayrollRecord};
pub use procurement::{ProcurementInput, ProcurementRecord};
pub use stock::{StockInput, StockRecord};
pub use tax::{TaxInput, TaxRecord};

// =============================================================================
// TESTS
// =============================================================================
