//! Domain types for the franchise unit-economics auditor.
//!
//! This crate only holds data: the business inputs, the financial result
//! produced from them, and the validation rules that decide whether an input
//! bundle may be computed at all. The formulas live in
//! `franchise-audit-calculator`.

/// Business entities (inputs and results).
pub mod entities;
/// Closed enumerations: industries and verdicts.
pub mod enums;
/// Error types.
pub mod error;
/// Small validated value types.
pub mod value_objects;

pub use entities::{
    BusinessProfile, CostBreakdown, CostMode, Diagnostics, ExpenseBreakdown, FinancialResult,
    VerdictReport,
};
pub use enums::{Industry, Verdict};
pub use error::DomainError;
pub use value_objects::{Money, Payback, Percentage};
