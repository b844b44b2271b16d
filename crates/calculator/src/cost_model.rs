//! Cost models.
//!
//! A cost model turns monthly revenue and rent into the full set of cost
//! lines. [`SimpleCostModel`] derives them from the industry table,
//! [`DetailedCostModel`] takes them from the caller.

use crate::industry::IndustryDefaults;
use crate::thresholds::{SIMPLE_MODE_MARKETING_SHARE, SIMPLE_MODE_UTILITIES};
use franchise_audit_domain::{BusinessProfile, CostBreakdown, CostMode, ExpenseBreakdown, Industry};
use rust_decimal::Decimal;

/// Cost lines produced by a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostStructure {
    pub breakdown: CostBreakdown,
    /// Whether part of the revenue flows through delivery aggregators.
    pub uses_aggregators: bool,
}

impl CostStructure {
    #[must_use]
    pub fn variable_costs(&self) -> Decimal {
        self.breakdown.variable()
    }

    #[must_use]
    pub fn fixed_costs(&self) -> Decimal {
        self.breakdown.fixed()
    }
}

/// Trait for modeling the monthly cost structure of a unit.
pub trait CostModel {
    /// Returns every cost line for the given revenue and rent.
    fn costs(&self, monthly_revenue: Decimal, monthly_rent: Decimal) -> CostStructure;

    /// Returns the model name.
    fn name(&self) -> &'static str;
}

/// Costs derived from industry defaults.
#[derive(Debug, Clone, Copy)]
pub struct SimpleCostModel {
    pub industry: Industry,
    pub defaults: IndustryDefaults,
}

impl SimpleCostModel {
    #[must_use]
    pub fn new(industry: Industry) -> Self {
        Self {
            industry,
            defaults: IndustryDefaults::for_industry(industry),
        }
    }
}

impl CostModel for SimpleCostModel {
    fn costs(&self, monthly_revenue: Decimal, monthly_rent: Decimal) -> CostStructure {
        let breakdown = CostBreakdown {
            cogs: monthly_revenue * self.defaults.cogs_ratio,
            aggregator_commission: monthly_revenue * self.defaults.commission_ratio,
            rent: monthly_rent,
            staff: self.defaults.staff_cost(monthly_revenue),
            utilities: SIMPLE_MODE_UTILITIES,
            marketing: monthly_revenue * SIMPLE_MODE_MARKETING_SHARE,
            royalty: Decimal::ZERO,
            misc: Decimal::ZERO,
        };

        CostStructure {
            breakdown,
            uses_aggregators: self.industry == Industry::CloudKitchen,
        }
    }

    fn name(&self) -> &'static str {
        "Industry Defaults"
    }
}

/// Costs supplied line by line by the caller.
#[derive(Debug, Clone, Copy)]
pub struct DetailedCostModel<'a> {
    pub industry: Industry,
    pub expenses: &'a ExpenseBreakdown,
}

impl<'a> DetailedCostModel<'a> {
    #[must_use]
    pub fn new(industry: Industry, expenses: &'a ExpenseBreakdown) -> Self {
        Self { industry, expenses }
    }
}

impl CostModel for DetailedCostModel<'_> {
    fn costs(&self, monthly_revenue: Decimal, monthly_rent: Decimal) -> CostStructure {
        let e = self.expenses;
        // Commission is charged on the delivery share of revenue only.
        let delivery_revenue = monthly_revenue * e.delivery_percent.fraction();
        let breakdown = CostBreakdown {
            cogs: monthly_revenue * e.cogs_percent.fraction(),
            aggregator_commission: delivery_revenue * e.aggregator_commission_percent.fraction(),
            rent: monthly_rent,
            staff: e.salaries.0,
            utilities: e.utilities.0,
            marketing: e.marketing.0,
            royalty: e.royalty.0,
            misc: e.misc.0,
        };

        CostStructure {
            breakdown,
            uses_aggregators: self.industry == Industry::CloudKitchen
                || e.delivery_percent.0 > Decimal::ZERO,
        }
    }

    fn name(&self) -> &'static str {
        "Detailed Expenses"
    }
}

/// Selects the cost model for a profile's mode.
#[must_use]
pub fn model_for(profile: &BusinessProfile) -> Box<dyn CostModel + '_> {
    match &profile.costs {
        CostMode::Simple => Box::new(SimpleCostModel::new(profile.industry)),
        CostMode::Detailed(expenses) => {
            Box::new(DetailedCostModel::new(profile.industry, expenses))
        }
    }
}

/// Computes the cost structure for a profile using the model its mode selects.
#[must_use]
pub fn costs_for(profile: &BusinessProfile, monthly_revenue: Decimal) -> CostStructure {
    model_for(profile).costs(monthly_revenue, profile.monthly_rent.0)
}
