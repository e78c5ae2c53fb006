use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderlens_core::{Entity, Money, OrderId, PaymentId};

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Paypal,
    BankTransfer,
    GiftCard,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [Self::Card, Self::Paypal, Self::BankTransfer, Self::GiftCard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Paypal => "paypal",
            Self::BankTransfer => "bank_transfer",
            Self::GiftCard => "gift_card",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payment record for an order. One payment per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    pub amount: Money,
    pub method: PaymentMethod,
    pub paid_at: DateTime<Utc>,
}

impl Entity for Payment {
    type Id = PaymentId;

    fn id(&self) -> PaymentId {
        self.id
    }
}
