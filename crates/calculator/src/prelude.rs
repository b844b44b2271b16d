//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use franchise_audit_calculator::prelude::*;
//! ```

// Entry point
pub use crate::calculator::{compute, monthly_revenue};

// Cost models
pub use crate::cost_model::{
    CostModel, CostStructure, DetailedCostModel, SimpleCostModel, costs_for, model_for,
};

// Diagnostics
pub use crate::diagnostics::{diagnose, ratio_of_revenue};

// Industry defaults
pub use crate::industry::{IndustryDefaults, StaffCostBase, scale_staff_cost};

// Verdict
pub use crate::verdict::{classify, verdict_report};

// Domain types callers need alongside `compute`
pub use franchise_audit_domain::{
    BusinessProfile, CostMode, DomainError, ExpenseBreakdown, FinancialResult, Industry, Money,
    Payback, Percentage, Verdict,
};
