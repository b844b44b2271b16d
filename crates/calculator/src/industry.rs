//! Default cost structure per industry, used in simple mode.

use crate::thresholds::{STAFF_SCALING_FACTOR, STAFF_SCALING_REVENUE};
use franchise_audit_domain::Industry;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// How the base staff cost of an industry is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffCostBase {
    /// A flat monthly amount.
    Fixed(Decimal),
    /// A share of monthly revenue (commission-paid stylists, for instance).
    RevenueShare(Decimal),
}

impl StaffCostBase {
    /// Resolves the base against a revenue figure, before scaling.
    #[must_use]
    pub fn resolve(&self, monthly_revenue: Decimal) -> Decimal {
        match self {
            StaffCostBase::Fixed(amount) => *amount,
            StaffCostBase::RevenueShare(share) => monthly_revenue * share,
        }
    }
}

/// Cost parameters assumed for an industry when the caller gives no
/// expense lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryDefaults {
    /// COGS as a fraction of revenue.
    pub cogs_ratio: Decimal,
    /// Aggregator commission as a fraction of revenue.
    pub commission_ratio: Decimal,
    pub staff_base: StaffCostBase,
    /// The risk that typically sinks units in this industry.
    pub structural_risk: &'static str,
}

impl IndustryDefaults {
    /// Looks up the defaults for an industry.
    #[must_use]
    pub fn for_industry(industry: Industry) -> Self {
        match industry {
            Industry::CafeQsr => Self {
                cogs_ratio: dec!(0.35),
                commission_ratio: Decimal::ZERO,
                staff_base: StaffCostBase::Fixed(dec!(40000)),
                structural_risk: "Food waste & location dependency",
            },
            Industry::CloudKitchen => Self {
                cogs_ratio: dec!(0.35),
                commission_ratio: dec!(0.30),
                staff_base: StaffCostBase::Fixed(dec!(30000)),
                structural_risk: "Aggregator commission erosion",
            },
            Industry::FitnessGym => Self {
                cogs_ratio: dec!(0.05),
                commission_ratio: Decimal::ZERO,
                staff_base: StaffCostBase::Fixed(dec!(25000)),
                structural_risk: "Member churn",
            },
            Industry::RetailStore => Self {
                cogs_ratio: dec!(0.65),
                commission_ratio: Decimal::ZERO,
                staff_base: StaffCostBase::Fixed(dec!(20000)),
                structural_risk: "Dead stock",
            },
            Industry::SalonSpa => Self {
                cogs_ratio: dec!(0.15),
                commission_ratio: Decimal::ZERO,
                staff_base: StaffCostBase::RevenueShare(dec!(0.40)),
                structural_risk: "Staff poaching clients",
            },
        }
    }

    /// Staff cost for a given revenue, including the high-revenue step.
    #[must_use]
    pub fn staff_cost(&self, monthly_revenue: Decimal) -> Decimal {
        scale_staff_cost(self.staff_base.resolve(monthly_revenue), monthly_revenue)
    }
}

/// Applies the single staffing step: above 500,000 of monthly revenue the
/// base is multiplied by 1.5. Revenue of exactly 500,000 keeps the base.
#[must_use]
pub fn scale_staff_cost(base: Decimal, monthly_revenue: Decimal) -> Decimal {
    if monthly_revenue > STAFF_SCALING_REVENUE {
        base * STAFF_SCALING_FACTOR
    } else {
        base
    }
}
