//! Money value object: integer minor units.
//!
//! Monetary values are carried in minor units (cents) end to end. Sums over
//! many line items therefore stay exact; there is no floating point anywhere
//! in the monetary path. Parsing and formatting use two-decimal strings
//! ("12.34"), which is how the source data denominates prices.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Monetary amount in minor units (cents).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add two amounts, reporting overflow instead of wrapping.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Scale by a unitless factor (e.g. a line-item quantity).
    pub fn checked_mul(self, factor: u64) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // f.pad so callers can align amounts in tabular output.
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse a decimal amount with at most two fraction digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::validation(format!("malformed money amount: {s:?}"));

        let (units, frac) = match s.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (s, ""),
        };

        if units.is_empty()
            || frac.len() > 2
            || !units.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let units: u64 = units.parse().map_err(|_| malformed())?;
        let cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| malformed())? * 10,
            _ => frac.parse::<u64>().map_err(|_| malformed())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("money amount out of range: {s:?}")))
    }
}
