use crate::error::DomainError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monthly or one-time currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Largest accepted amount. Keeps `volume * ticket * 30` and the summed
    /// cost lines inside `Decimal` range for any `u32` volume.
    pub const MAX: Decimal = dec!(1000000000000000);

    /// Creates an amount, rejecting negatives and values above [`Money::MAX`].
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] naming `field`.
    pub fn new(field: &'static str, value: Decimal) -> Result<Self, DomainError> {
        let money = Self(value);
        money.validate(field)?;
        Ok(money)
    }

    /// Checks the `0..=Money::MAX` bound.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] naming `field`.
    pub fn validate(&self, field: &'static str) -> Result<(), DomainError> {
        if self.0 < Decimal::ZERO {
            return Err(DomainError::invalid(
                field,
                format!("must not be negative, got {}", self.0),
            ));
        }
        if self.0 > Self::MAX {
            return Err(DomainError::invalid(
                field,
                format!("{} exceeds the maximum of {}", self.0, Self::MAX),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
