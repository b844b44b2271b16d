//! Secondary checks on the cost structure.
//!
//! These flag common traps (rent, staffing, marketing, aggregator fees) but
//! never feed back into the verdict.

use crate::cost_model::CostStructure;
use crate::thresholds::{MAX_STAFF_RATIO, MIN_MARKETING_RATIO, RENT_TRAP_RATIO, SAFE_RENT_RATIO};
use franchise_audit_domain::Diagnostics;
use rust_decimal::Decimal;
use tracing::warn;

/// Divides by revenue, returning zero when revenue is zero.
///
/// A quotient beyond the `Decimal` range saturates to `Decimal::MAX` or
/// `Decimal::MIN` by sign.
#[must_use]
pub fn ratio_of_revenue(amount: Decimal, monthly_revenue: Decimal) -> Decimal {
    if monthly_revenue.is_zero() {
        return Decimal::ZERO;
    }
    amount.checked_div(monthly_revenue).unwrap_or_else(|| {
        if amount.is_sign_negative() == monthly_revenue.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Runs every diagnostic check against a cost structure.
#[must_use]
pub fn diagnose(monthly_revenue: Decimal, costs: &CostStructure) -> Diagnostics {
    let breakdown = &costs.breakdown;

    let rent_ratio = ratio_of_revenue(breakdown.rent, monthly_revenue);
    let staff_ratio = ratio_of_revenue(breakdown.staff, monthly_revenue);
    let marketing_ratio = ratio_of_revenue(breakdown.marketing, monthly_revenue);

    let diagnostics = Diagnostics {
        rent_ratio,
        rent_trap: rent_ratio > RENT_TRAP_RATIO,
        safe_rent_benchmark: SAFE_RENT_RATIO,
        hidden_commission: costs
            .uses_aggregators
            .then_some(breakdown.aggregator_commission),
        staff_ratio,
        staff_overload: staff_ratio > MAX_STAFF_RATIO,
        marketing_ratio,
        marketing_underfunded: marketing_ratio < MIN_MARKETING_RATIO,
    };

    if diagnostics.rent_trap {
        warn!(rent_ratio = %rent_ratio.round_dp(3), "Rent exceeds trap threshold");
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use franchise_audit_domain::CostBreakdown;
    use rust_decimal_macros::dec;

    fn structure(rent: Decimal, staff: Decimal, marketing: Decimal) -> CostStructure {
        CostStructure {
            breakdown: CostBreakdown {
                rent,
                staff,
                marketing,
                aggregator_commission: dec!(12000),
                ..CostBreakdown::default()
            },
            uses_aggregators: false,
        }
    }

    #[test]
    fn test_zero_revenue_ratios_are_zero() {
        let diag = diagnose(dec!(0), &structure(dec!(50000), dec!(40000), dec!(0)));
        assert_eq!(diag.rent_ratio, dec!(0));
        assert_eq!(diag.staff_ratio, dec!(0));
        assert_eq!(diag.marketing_ratio, dec!(0));
        assert!(!diag.rent_trap);
        // Zero marketing share is still below the floor.
        assert!(diag.marketing_underfunded);
    }

    #[test]
    fn test_ratio_guard_covers_losses() {
        assert_eq!(ratio_of_revenue(dec!(-15000), dec!(0)), dec!(0));
        assert_eq!(ratio_of_revenue(dec!(-15000), dec!(100000)), dec!(-0.15));
    }

    #[test]
    fn test_ratio_saturates_on_tiny_revenue() {
        let revenue = Decimal::new(3, 27);
        assert_eq!(ratio_of_revenue(dec!(50000), revenue), Decimal::MAX);
        assert_eq!(ratio_of_revenue(dec!(-50000), revenue), Decimal::MIN);

        let diag = diagnose(revenue, &structure(dec!(50000), dec!(0), dec!(0)));
        assert!(diag.rent_trap);
    }

    #[test]
    fn test_rent_trap_triggers_above_twenty_percent() {
        let at_limit = diagnose(dec!(250000), &structure(dec!(50000), dec!(0), dec!(10000)));
        assert_eq!(at_limit.rent_ratio, dec!(0.2));
        assert!(!at_limit.rent_trap);

        let over = diagnose(dec!(240000), &structure(dec!(50000), dec!(0), dec!(10000)));
        assert!(over.rent_trap);
    }

    #[test]
    fn test_safe_benchmark_is_not_the_trigger() {
        // 18% rent: above the 15% benchmark, below the 20% trap.
        let diag = diagnose(dec!(100000), &structure(dec!(18000), dec!(0), dec!(5000)));
        assert_eq!(diag.safe_rent_benchmark, dec!(0.15));
        assert!(diag.rent_ratio > diag.safe_rent_benchmark);
        assert!(!diag.rent_trap);
    }

    #[test]
    fn test_staff_and_marketing_flags() {
        let diag = diagnose(dec!(100000), &structure(dec!(10000), dec!(26000), dec!(2000)));
        assert!(diag.staff_overload);
        assert!(diag.marketing_underfunded);

        let healthy = diagnose(dec!(100000), &structure(dec!(10000), dec!(25000), dec!(3000)));
        assert!(!healthy.staff_overload);
        assert!(!healthy.marketing_underfunded);
    }

    #[test]
    fn test_hidden_commission_only_with_aggregators() {
        let mut costs = structure(dec!(10000), dec!(0), dec!(5000));
        assert_eq!(diagnose(dec!(100000), &costs).hidden_commission, None);

        costs.uses_aggregators = true;
        assert_eq!(
            diagnose(dec!(100000), &costs).hidden_commission,
            Some(dec!(12000))
        );
    }
}
