//! Value objects: equality by value, not identity.

use core::str::FromStr;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Monetary price of a catalog item.
///
/// Fixed-precision decimal: at most [`Price::MAX_DIGITS`] digits in total,
/// exactly [`Price::DECIMAL_PLACES`] fractional digits after construction,
/// never negative. The scale is fixed regardless of locale, so a price always
/// serializes as e.g. `"10.50"` (never `"10.5"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const MAX_DIGITS: u32 = 6;
    pub const DECIMAL_PLACES: u32 = 2;

    /// Validate and normalize a decimal into a price.
    ///
    /// Inputs with fewer fractional digits are rescaled (`10.5` -> `10.50`);
    /// inputs with more are rejected, not rounded.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() {
            return Err(DomainError::validation(
                "Ensure this value is greater than or equal to 0.",
            ));
        }
        if value.scale() > Self::DECIMAL_PLACES {
            return Err(DomainError::validation(
                "Ensure that there are no more than 2 decimal places.",
            ));
        }

        let mut normalized = value;
        normalized.rescale(Self::DECIMAL_PLACES);

        // 6 total digits with 2 fractional digits caps the value at 9999.99.
        if normalized >= Decimal::from(10_000) {
            return Err(DomainError::validation(
                "Ensure that there are no more than 6 digits in total.",
            ));
        }

        Ok(Self(normalized))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s)
            .map_err(|_| DomainError::validation("A valid number is required."))?;
        Self::new(decimal)
    }
}
