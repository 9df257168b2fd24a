//! # regdesk-shared
//!
//! Foundational validation types for the regdesk workspace.
//!
//! This crate provides the two pieces every other crate builds on:
//!
//! - The [`Validate`]/[`ValidationError`] trait pair consumed by the
//!   `#[derive(Validate)]` macro.
//! - The concrete [`FieldError`] currency carrying a field name and the
//!   violated constraint.
//!
//! ## Design Principles
//!
//! 1. **No dependencies** - foundational types only
//! 2. **Explicit errors** - every failure names the offending field

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod validation;

pub use errors::FieldError;
pub use validation::{Validate, ValidationError};
