//! Output bundle of a unit-economics calculation.

use crate::enums::Verdict;
use crate::value_objects::Payback;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every monthly cost line that went into net profit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub cogs: Decimal,
    /// Delivery aggregator commission.
    pub aggregator_commission: Decimal,
    pub rent: Decimal,
    /// Staff cost (industry default in simple mode, salaries in detailed mode).
    pub staff: Decimal,
    pub utilities: Decimal,
    pub marketing: Decimal,
    pub royalty: Decimal,
    pub misc: Decimal,
}

impl CostBreakdown {
    /// Costs proportional to revenue.
    #[must_use]
    pub fn variable(&self) -> Decimal {
        self.cogs + self.aggregator_commission
    }

    /// Costs independent of revenue volume.
    #[must_use]
    pub fn fixed(&self) -> Decimal {
        self.rent + self.staff + self.utilities + self.marketing + self.royalty + self.misc
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.variable() + self.fixed()
    }
}

/// Traffic-light verdict with the text shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub verdict: Verdict,
    /// One-line banner, e.g. "GREEN LIGHT: 8.2 Months Payback".
    pub headline: String,
    pub advisory: String,
    /// Structural risk carried over from the industry defaults.
    pub structural_risk: String,
}

/// Secondary checks. They inform the reader but never change the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Rent divided by revenue (0 when revenue is 0).
    pub rent_ratio: Decimal,
    /// Rent ratio above the trap trigger.
    pub rent_trap: bool,
    /// Display-only "safe" rent ratio the trap is explained against.
    pub safe_rent_benchmark: Decimal,
    /// Aggregator commission, reported when the unit sells through
    /// aggregators.
    pub hidden_commission: Option<Decimal>,
    pub staff_ratio: Decimal,
    /// Staff cost above the allowed share of revenue.
    pub staff_overload: bool,
    pub marketing_ratio: Decimal,
    /// Marketing spend below the minimum share of revenue.
    pub marketing_underfunded: bool,
}

impl Diagnostics {
    /// Human-readable warnings for every raised flag.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(commission) = self.hidden_commission {
            warnings.push(format!(
                "Hidden cost: {} goes to delivery aggregators every month",
                commission.round_dp(0)
            ));
        }
        if self.rent_trap {
            warnings.push(format!(
                "Rent trap: rent is {}% of sales, safe limit is {}%",
                as_percent(self.rent_ratio),
                as_percent(self.safe_rent_benchmark)
            ));
        }
        if self.staff_overload {
            warnings.push(format!(
                "Staff cost is {}% of sales",
                as_percent(self.staff_ratio)
            ));
        }
        if self.marketing_underfunded {
            warnings.push(format!(
                "Marketing budget is only {}% of sales",
                as_percent(self.marketing_ratio)
            ));
        }
        warnings
    }
}

fn as_percent(ratio: Decimal) -> Decimal {
    ratio.saturating_mul(Decimal::ONE_HUNDRED).round_dp(0)
}

/// Result of a unit-economics calculation. Never mutated after computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialResult {
    pub monthly_revenue: Decimal,
    pub variable_costs: Decimal,
    pub fixed_costs: Decimal,
    pub gross_profit: Decimal,
    pub net_profit: Decimal,
    /// Net profit as a percentage of revenue (0 when revenue is 0).
    pub margin_percent: Decimal,
    pub payback: Payback,
    pub breakdown: CostBreakdown,
    pub verdict: VerdictReport,
    pub diagnostics: Diagnostics,
}

impl FinancialResult {
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        self.variable_costs + self.fixed_costs
    }
}
