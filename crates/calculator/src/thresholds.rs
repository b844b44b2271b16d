//! Constants the verdict and diagnostics were tuned against.
//!
//! Revenue is computed on a flat 30-day month and the payback bands below
//! were calibrated on that figure. Change them together or not at all.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Days in every month.
pub const DAYS_PER_MONTH: Decimal = dec!(30);

/// Revenue above which simple-mode staff cost is scaled up (strictly greater).
pub const STAFF_SCALING_REVENUE: Decimal = dec!(500000);

/// Multiplier applied to the staff base above [`STAFF_SCALING_REVENUE`].
pub const STAFF_SCALING_FACTOR: Decimal = dec!(1.5);

/// Flat monthly utilities in simple mode.
pub const SIMPLE_MODE_UTILITIES: Decimal = dec!(15000);

/// Marketing spend as a share of revenue in simple mode.
pub const SIMPLE_MODE_MARKETING_SHARE: Decimal = dec!(0.05);

/// Longest payback (months, inclusive) that still earns a green light.
pub const GREEN_MAX_PAYBACK_MONTHS: Decimal = dec!(18);

/// Longest payback (months, inclusive) that still earns a yellow light.
pub const YELLOW_MAX_PAYBACK_MONTHS: Decimal = dec!(24);

/// Rent ratio above which the rent trap is flagged.
pub const RENT_TRAP_RATIO: Decimal = dec!(0.20);

/// Rent ratio quoted as the safe target. Display only, never a trigger.
pub const SAFE_RENT_RATIO: Decimal = dec!(0.15);

/// Staff cost ratio above which staffing is flagged.
pub const MAX_STAFF_RATIO: Decimal = dec!(0.25);

/// Marketing ratio below which marketing is flagged.
pub const MIN_MARKETING_RATIO: Decimal = dec!(0.03);
