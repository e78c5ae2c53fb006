use serde::{Deserialize, Serialize};

use orderlens_core::{Entity, Money, OrderId, OrderItemId, ProductId};

/// One product quantity/price entry within an order.
///
/// `unit_price` is the price snapshot taken when the order was placed, not a
/// live reference into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl OrderItem {
    /// quantity × unit price, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(u64::from(self.quantity))
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> OrderItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_quantity_and_price() {
        let item = OrderItem {
            id: OrderItemId::new(1),
            order_id: OrderId::new(1),
            product_id: ProductId::new(1),
            quantity: 3,
            unit_price: Money::from_minor(250),
        };
        assert_eq!(item.line_total(), Some(Money::from_minor(750)));
    }

    #[test]
    fn line_total_reports_overflow() {
        let item = OrderItem {
            id: OrderItemId::new(1),
            order_id: OrderId::new(1),
            product_id: ProductId::new(1),
            quantity: 2,
            unit_price: Money::from_minor(u64::MAX),
        };
        assert_eq!(item.line_total(), None);
    }
}
