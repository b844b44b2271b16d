//! Input bundle for a single unit-economics calculation.

use crate::enums::Industry;
use crate::error::DomainError;
use crate::value_objects::{Money, Percentage};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every monthly expense line, supplied by the caller in detailed mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Electricity, water, internet.
    pub utilities: Money,
    pub marketing: Money,
    /// Franchisor royalty, as a flat monthly amount.
    pub royalty: Money,
    pub misc: Money,
    pub salaries: Money,
    /// Cost of goods sold as a share of revenue.
    pub cogs_percent: Percentage,
    /// Share of revenue that comes through delivery aggregators.
    pub delivery_percent: Percentage,
    /// Commission the aggregator takes on delivery revenue.
    pub aggregator_commission_percent: Percentage,
    /// Competing outlets in the catchment, when known. Informational only.
    pub competitor_count: Option<u32>,
}

impl ExpenseBreakdown {
    /// Validates every line.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] for the first out-of-range amount
    /// or percentage.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.utilities.validate("utilities")?;
        self.marketing.validate("marketing")?;
        self.royalty.validate("royalty")?;
        self.misc.validate("misc")?;
        self.salaries.validate("salaries")?;
        self.cogs_percent.validate("cogs_percent")?;
        self.delivery_percent.validate("delivery_percent")?;
        self.aggregator_commission_percent
            .validate("aggregator_commission_percent")?;
        Ok(())
    }
}

/// How the cost structure is obtained for a calculation.
///
/// The two modes are mutually exclusive: either every line comes from the
/// industry table, or every line comes from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CostMode {
    /// Derive costs from the industry default table.
    #[default]
    Simple,
    /// Use the caller's expense lines.
    Detailed(ExpenseBreakdown),
}

/// Business inputs for one franchise unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub industry: Industry,
    /// Free-form location label, passed through to the narrative audit.
    pub location: Option<String>,
    /// One-time setup cost.
    pub capex_total: Money,
    pub monthly_rent: Money,
    /// Orders or visits per day.
    pub daily_volume: u32,
    /// Average bill value.
    pub average_ticket: Money,
    pub costs: CostMode,
}

impl BusinessProfile {
    /// Creates a simple-mode profile.
    #[must_use]
    pub fn new(
        industry: Industry,
        capex_total: Decimal,
        monthly_rent: Decimal,
        daily_volume: u32,
        average_ticket: Decimal,
    ) -> Self {
        Self {
            industry,
            location: None,
            capex_total: Money(capex_total),
            monthly_rent: Money(monthly_rent),
            daily_volume,
            average_ticket: Money(average_ticket),
            costs: CostMode::Simple,
        }
    }

    /// Sets the location label.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Switches the profile to detailed mode with the given expense lines.
    #[must_use]
    pub fn with_expenses(mut self, expenses: ExpenseBreakdown) -> Self {
        self.costs = CostMode::Detailed(expenses);
        self
    }

    /// Returns the caller's expense lines in detailed mode.
    #[must_use]
    pub fn expenses(&self) -> Option<&ExpenseBreakdown> {
        match &self.costs {
            CostMode::Simple => None,
            CostMode::Detailed(expenses) => Some(expenses),
        }
    }

    #[must_use]
    pub fn is_detailed(&self) -> bool {
        self.expenses().is_some()
    }

    /// Checks the preconditions of a calculation.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] when an amount is negative or
    /// above [`Money::MAX`], the daily volume is zero, the average ticket is
    /// not positive, or a detailed expense line is invalid.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.capex_total.validate("capex_total")?;
        self.monthly_rent.validate("monthly_rent")?;
        if self.daily_volume == 0 {
            return Err(DomainError::invalid("daily_volume", "must be positive"));
        }
        self.average_ticket.validate("average_ticket")?;
        if self.average_ticket.0 <= Decimal::ZERO {
            return Err(DomainError::invalid(
                "average_ticket",
                format!("must be positive, got {}", self.average_ticket),
            ));
        }
        if let Some(expenses) = self.expenses() {
            expenses.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cafe() -> BusinessProfile {
        BusinessProfile::new(Industry::CafeQsr, dec!(1500000), dec!(50000), 80, dec!(200))
    }

    fn expenses() -> ExpenseBreakdown {
        ExpenseBreakdown {
            utilities: Money(dec!(12000)),
            marketing: Money(dec!(15000)),
            royalty: Money(dec!(20000)),
            misc: Money(dec!(5000)),
            salaries: Money(dec!(60000)),
            cogs_percent: Percentage(dec!(32)),
            delivery_percent: Percentage(dec!(40)),
            aggregator_commission_percent: Percentage(dec!(25)),
            competitor_count: Some(4),
        }
    }

    #[test]
    fn test_simple_profile_is_valid() {
        let profile = cafe();
        assert!(profile.validate().is_ok());
        assert!(!profile.is_detailed());
        assert_eq!(profile.costs, CostMode::Simple);
    }

    #[test]
    fn test_with_expenses_switches_mode() {
        let profile = cafe().with_expenses(expenses()).with_location("Indiranagar");
        assert!(profile.is_detailed());
        assert_eq!(profile.location.as_deref(), Some("Indiranagar"));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_negative_rent_rejected() {
        let mut profile = cafe();
        profile.monthly_rent = Money(dec!(-1));
        assert_eq!(profile.validate().unwrap_err().field(), "monthly_rent");
    }

    #[test]
    fn test_zero_capex_allowed() {
        let mut profile = cafe();
        profile.capex_total = Money(dec!(0));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_zero_volume_rejected() {
        let mut profile = cafe();
        profile.daily_volume = 0;
        assert_eq!(profile.validate().unwrap_err().field(), "daily_volume");
    }

    #[test]
    fn test_non_positive_ticket_rejected() {
        let mut profile = cafe();
        profile.average_ticket = Money(dec!(0));
        assert_eq!(profile.validate().unwrap_err().field(), "average_ticket");
        profile.average_ticket = Money(dec!(-10));
        assert_eq!(profile.validate().unwrap_err().field(), "average_ticket");
    }

    #[test]
    fn test_detailed_lines_are_validated() {
        let mut lines = expenses();
        lines.salaries = Money(dec!(-100));
        let profile = cafe().with_expenses(lines);
        assert_eq!(profile.validate().unwrap_err().field(), "salaries");

        let mut lines = expenses();
        lines.aggregator_commission_percent = Percentage(dec!(130));
        let profile = cafe().with_expenses(lines);
        assert_eq!(
            profile.validate().unwrap_err().field(),
            "aggregator_commission_percent"
        );
    }

    #[test]
    fn test_amounts_above_cap_rejected() {
        let mut profile = cafe();
        profile.average_ticket = Money(dec!(1000000000000000000000));
        assert_eq!(profile.validate().unwrap_err().field(), "average_ticket");

        let mut lines = expenses();
        lines.royalty = Money(Money::MAX + dec!(1));
        let profile = cafe().with_expenses(lines);
        assert_eq!(profile.validate().unwrap_err().field(), "royalty");
    }

    #[test]
    fn test_profile_serializes_cost_mode() {
        let json = serde_json::to_string(&cafe().with_expenses(expenses())).unwrap();
        assert!(json.contains("\"Detailed\""));
        assert!(json.contains("\"industry\":\"CafeQsr\""));
    }
}
