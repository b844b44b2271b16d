use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Months of net profit needed to recover the capital outlay.
///
/// `Unbounded` is used when the unit never makes a profit. Variant order
/// matters: the derived `Ord` places `Unbounded` after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Payback {
    Months(Decimal),
    Unbounded,
}

impl Payback {
    /// Numeric stand-in for an unbounded payback in flat exports.
    pub const SENTINEL_MONTHS: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

    /// Computes `capex / net_profit`, or `Unbounded` when the unit is not
    /// profitable or the quotient is too large to represent.
    #[must_use]
    pub fn from_profit(capex: Decimal, monthly_net_profit: Decimal) -> Self {
        if monthly_net_profit <= Decimal::ZERO {
            return Payback::Unbounded;
        }
        capex
            .checked_div(monthly_net_profit)
            .map_or(Payback::Unbounded, Payback::Months)
    }

    /// Finite months, if any.
    #[must_use]
    pub fn months(&self) -> Option<Decimal> {
        match self {
            Payback::Months(m) => Some(*m),
            Payback::Unbounded => None,
        }
    }

    /// Months, with [`Payback::SENTINEL_MONTHS`] standing in for `Unbounded`.
    #[must_use]
    pub fn as_sentinel(&self) -> Decimal {
        self.months().unwrap_or(Self::SENTINEL_MONTHS)
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Months(m) => write!(f, "{} months", m.round_dp(1)),
            Payback::Unbounded => f.write_str("never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unbounded_orders_after_finite() {
        assert!(Payback::Unbounded > Payback::Months(dec!(100000)));
        assert!(Payback::Months(dec!(18)) < Payback::Months(dec!(24)));
    }

    #[test]
    fn test_from_profit() {
        assert_eq!(
            Payback::from_profit(dec!(1200000), dec!(100000)),
            Payback::Months(dec!(12))
        );
        assert_eq!(Payback::from_profit(dec!(1200000), dec!(0)), Payback::Unbounded);
        assert_eq!(Payback::from_profit(dec!(1200000), dec!(-5000)), Payback::Unbounded);
    }

    #[test]
    fn test_from_profit_overflow_is_unbounded() {
        // A razor-thin profit divides the capex past the Decimal range.
        let capex = dec!(100000000000);
        let net = Decimal::new(1, 20);
        assert_eq!(Payback::from_profit(capex, net), Payback::Unbounded);
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(Payback::Unbounded.as_sentinel(), dec!(999));
        assert_eq!(Payback::Months(dec!(8.5)).as_sentinel(), dec!(8.5));
    }

    #[test]
    fn test_display_rounds_to_one_place() {
        assert_eq!(Payback::Months(dec!(8.1967)).to_string(), "8.2 months");
        assert_eq!(Payback::Unbounded.to_string(), "never");
    }
}
