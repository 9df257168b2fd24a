//! Interactive program session handlers.

pub mod attendance;
pub mod flight;
pub mod payroll;
pub mod procurement;
pub mod stock;
pub mod tax;

pub use attendance::run_attendance;
pub use flight::run_flight;
pub use payroll::run_payroll;
pub use procurement::run_procurement;
pub use stock::run_stock;
pub use tax::run_tax;
