//! Strongly-typed identifiers used across the domain.
//!
//! The source data model keys every relation with an integer identifier, so
//! identifiers are `u64` newtypes rather than opaque handles. Keeping one
//! type per relation makes it impossible to join an order id against a
//! customer id by accident.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

/// Identifier of a single line item within an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(u64);

/// Identifier of a payment record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(u64);

macro_rules! impl_u64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = u64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_u64_newtype!(CustomerId, "CustomerId");
impl_u64_newtype!(ProductId, "ProductId");
impl_u64_newtype!(OrderId, "OrderId");
impl_u64_newtype!(OrderItemId, "OrderItemId");
impl_u64_newtype!(PaymentId, "PaymentId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_identifier() {
        let id: OrderId = "42".parse().unwrap();
        assert_eq!(id, OrderId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_identifier() {
        let err = "abc".parse::<CustomerId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.contains("CustomerId")),
            _ => panic!("expected InvalidId"),
        }
    }

    #[test]
    fn orders_by_raw_value() {
        assert!(OrderId::new(3) < OrderId::new(7));
    }
}
