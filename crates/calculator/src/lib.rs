//! Unit-economics calculator for franchise audits.
//!
//! Turns a [`BusinessProfile`](franchise_audit_domain::BusinessProfile) into a
//! [`FinancialResult`](franchise_audit_domain::FinancialResult):
//! - Monthly revenue on a flat 30-day month
//! - Cost structure from industry defaults or caller-supplied lines
//! - Net profit, margin and payback period
//! - Traffic-light verdict and secondary diagnostics
//!
//! Everything here is pure and synchronous.

/// Prelude module for convenient imports.
pub mod prelude;

/// The `compute` entry point.
pub mod calculator;
/// Simple and detailed cost models.
pub mod cost_model;
/// Rent, staff, marketing and commission checks.
pub mod diagnostics;
/// Industry default cost parameters.
pub mod industry;
/// Tuned constants.
pub mod thresholds;
/// Payback classification.
pub mod verdict;

pub use calculator::{compute, monthly_revenue};
