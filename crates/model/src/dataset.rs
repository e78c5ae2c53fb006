//! The in-memory bundle of relations the report reads.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use orderlens_core::{CustomerId, DomainError, DomainResult, OrderId, OrderItemId, PaymentId, ProductId};

use crate::customer::Customer;
use crate::order::Order;
use crate::order_item::OrderItem;
use crate::payment::Payment;
use crate::product::Product;

/// The five relations, as externally supplied rows. No ordering is assumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

/// Per-relation row counts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub order_items: usize,
    pub payments: usize,
}

impl Dataset {
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            customers: self.customers.len(),
            products: self.products.len(),
            orders: self.orders.len(),
            order_items: self.order_items.len(),
            payments: self.payments.len(),
        }
    }

    /// Check key uniqueness and referential integrity.
    ///
    /// Rejected: duplicate keys in any relation, more than one payment for an
    /// order, line items or payments referencing an unknown order, line items
    /// referencing an unknown product, and non-positive quantities.
    ///
    /// Deliberately NOT rejected: an order whose customer or payment is
    /// absent. The report's inner joins drop such orders silently, so they
    /// are valid (if incomplete) input, not malformed input.
    pub fn validate(&self) -> DomainResult<()> {
        let mut customer_ids: HashSet<CustomerId> = HashSet::with_capacity(self.customers.len());
        for customer in &self.customers {
            if !customer_ids.insert(customer.id) {
                return Err(DomainError::invalid_id(format!(
                    "duplicate customer_id {}",
                    customer.id
                )));
            }
        }

        let mut product_ids: HashSet<ProductId> = HashSet::with_capacity(self.products.len());
        for product in &self.products {
            if !product_ids.insert(product.id) {
                return Err(DomainError::invalid_id(format!(
                    "duplicate product_id {}",
                    product.id
                )));
            }
        }

        let mut order_ids: HashSet<OrderId> = HashSet::with_capacity(self.orders.len());
        for order in &self.orders {
            if !order_ids.insert(order.id) {
                return Err(DomainError::invalid_id(format!(
                    "duplicate order_id {}",
                    order.id
                )));
            }
        }

        let mut item_ids: HashSet<OrderItemId> = HashSet::with_capacity(self.order_items.len());
        for item in &self.order_items {
            if !item_ids.insert(item.id) {
                return Err(DomainError::invalid_id(format!(
                    "duplicate order_item_id {}",
                    item.id
                )));
            }
            if !order_ids.contains(&item.order_id) {
                return Err(DomainError::invalid_id(format!(
                    "order_item {} references unknown order {}",
                    item.id, item.order_id
                )));
            }
            if !product_ids.contains(&item.product_id) {
                return Err(DomainError::invalid_id(format!(
                    "order_item {} references unknown product {}",
                    item.id, item.product_id
                )));
            }
            if item.quantity == 0 {
                return Err(DomainError::validation(format!(
                    "order_item {} has non-positive quantity",
                    item.id
                )));
            }
        }

        let mut payment_ids: HashSet<PaymentId> = HashSet::with_capacity(self.payments.len());
        let mut paid_orders: HashSet<OrderId> = HashSet::with_capacity(self.payments.len());
        for payment in &self.payments {
            if !payment_ids.insert(payment.id) {
                return Err(DomainError::invalid_id(format!(
                    "duplicate payment_id {}",
                    payment.id
                )));
            }
            if !order_ids.contains(&payment.order_id) {
                return Err(DomainError::invalid_id(format!(
                    "payment {} references unknown order {}",
                    payment.id, payment.order_id
                )));
            }
            if !paid_orders.insert(payment.order_id) {
                return Err(DomainError::validation(format!(
                    "multiple payments for order {}",
                    payment.order_id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use orderlens_core::Money;

    use super::*;
    use crate::order::OrderStatus;
    use crate::payment::PaymentMethod;
    use crate::product::ProductCategory;

    fn ts() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn sample_dataset() -> Dataset {
        Dataset {
            customers: vec![Customer {
                id: CustomerId::new(1),
                name: "Alice Dawson".to_string(),
                email: "alice.dawson@example.com".to_string(),
                country: Some("Norway".to_string()),
                created_at: ts(),
            }],
            products: vec![Product {
                id: ProductId::new(1),
                name: "Acme Book".to_string(),
                category: ProductCategory::Books,
                unit_price: Money::from_minor(1000),
            }],
            orders: vec![Order {
                id: OrderId::new(1),
                customer_id: CustomerId::new(1),
                order_date: ts(),
                status: OrderStatus::Delivered,
            }],
            order_items: vec![OrderItem {
                id: OrderItemId::new(1),
                order_id: OrderId::new(1),
                product_id: ProductId::new(1),
                quantity: 2,
                unit_price: Money::from_minor(1000),
            }],
            payments: vec![Payment {
                id: PaymentId::new(1),
                order_id: OrderId::new(1),
                amount: Money::from_minor(2000),
                method: PaymentMethod::Card,
                paid_at: ts(),
            }],
        }
    }

    #[test]
    fn valid_dataset_passes() {
        assert_eq!(sample_dataset().validate(), Ok(()));
    }

    #[test]
    fn summary_counts_rows() {
        let summary = sample_dataset().summary();
        assert_eq!(summary.customers, 1);
        assert_eq!(summary.products, 1);
        assert_eq!(summary.orders, 1);
        assert_eq!(summary.order_items, 1);
        assert_eq!(summary.payments, 1);
    }

    #[test]
    fn rejects_duplicate_order_id() {
        let mut dataset = sample_dataset();
        dataset.orders.push(dataset.orders[0].clone());
        match dataset.validate().unwrap_err() {
            DomainError::InvalidId(msg) => assert!(msg.contains("duplicate order_id")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_item_referencing_unknown_order() {
        let mut dataset = sample_dataset();
        dataset.order_items[0].order_id = OrderId::new(99);
        match dataset.validate().unwrap_err() {
            DomainError::InvalidId(msg) => assert!(msg.contains("unknown order 99")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_item_referencing_unknown_product() {
        let mut dataset = sample_dataset();
        dataset.order_items[0].product_id = ProductId::new(99);
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut dataset = sample_dataset();
        dataset.order_items[0].quantity = 0;
        match dataset.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("non-positive quantity")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_second_payment_for_same_order() {
        let mut dataset = sample_dataset();
        let mut second = dataset.payments[0].clone();
        second.id = PaymentId::new(2);
        dataset.payments.push(second);
        match dataset.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("multiple payments")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn order_without_customer_or_payment_is_still_valid() {
        let mut dataset = sample_dataset();
        dataset.customers.clear();
        dataset.payments.clear();
        assert_eq!(dataset.validate(), Ok(()));
    }

    #[test]
    fn round_trips_through_json() {
        let dataset = sample_dataset();
        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }
}
