use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A whole-number percentage in `0..=100` (e.g. `35` for 35%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(pub Decimal);

impl Percentage {
    /// Creates a percentage, rejecting values outside `0..=100`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] naming `field` when out of range.
    pub fn new(field: &'static str, value: Decimal) -> Result<Self, DomainError> {
        let pct = Self(value);
        pct.validate(field)?;
        Ok(pct)
    }

    /// Checks the `0..=100` bound.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] naming `field` when out of range.
    pub fn validate(&self, field: &'static str) -> Result<(), DomainError> {
        if self.0 < Decimal::ZERO || self.0 > Decimal::ONE_HUNDRED {
            return Err(DomainError::invalid(
                field,
                format!("{} is outside 0..=100", self.0),
            ));
        }
        Ok(())
    }

    /// The percentage as a fraction (`35` becomes `0.35`).
    #[must_use]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}
