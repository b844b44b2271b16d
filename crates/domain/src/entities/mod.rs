pub mod business_profile;
pub mod financial_result;

pub use business_profile::{BusinessProfile, CostMode, ExpenseBreakdown};
pub use financial_result::{CostBreakdown, Diagnostics, FinancialResult, VerdictReport};
