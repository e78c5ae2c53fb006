//! Rank orders by the summed value of their line items.
//!
//! One pass builds customer and payment indexes and folds line items into
//! per-order totals; a second pass over the orders assembles the joined rows.
//! Inner-join semantics throughout: an order missing its customer or payment,
//! or with no line items, is dropped from the result rather than reported as
//! an error.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use orderlens_core::{CustomerId, DomainError, DomainResult, Money, OrderId};
use orderlens_model::{Customer, Dataset, Payment, PaymentMethod};

/// Number of rows the standard report keeps.
pub const DEFAULT_LIMIT: usize = 20;

/// One row of the report: an order with its aggregated line-item total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopOrderRow {
    pub order_id: OrderId,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Money,
    pub payment_method: PaymentMethod,
}

/// Produce the highest-value orders, descending by total, truncated to
/// `limit` rows.
///
/// The total of an order is the exact minor-unit sum of quantity × unit price
/// over its line items. Ties on the total are broken by ascending order id so
/// the output is deterministic. Overflow while summing is reported as a
/// validation error instead of wrapping.
pub fn top_orders(dataset: &Dataset, limit: usize) -> DomainResult<Vec<TopOrderRow>> {
    let customers: HashMap<CustomerId, &Customer> = dataset
        .customers
        .iter()
        .map(|customer| (customer.id, customer))
        .collect();

    // First payment wins; validated datasets have at most one per order.
    let mut payments: HashMap<OrderId, &Payment> = HashMap::with_capacity(dataset.payments.len());
    for payment in &dataset.payments {
        payments.entry(payment.order_id).or_insert(payment);
    }

    let mut totals: HashMap<OrderId, Money> = HashMap::new();
    for item in &dataset.order_items {
        let line_total = item.line_total().ok_or_else(|| {
            DomainError::validation(format!("line total overflows for order_item {}", item.id))
        })?;
        let total = totals.entry(item.order_id).or_insert(Money::ZERO);
        *total = total.checked_add(line_total).ok_or_else(|| {
            DomainError::validation(format!("total amount overflows for order {}", item.order_id))
        })?;
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for order in &dataset.orders {
        let Some(&total_amount) = totals.get(&order.id) else {
            dropped += 1;
            continue;
        };
        let Some(customer) = customers.get(&order.customer_id) else {
            dropped += 1;
            continue;
        };
        let Some(payment) = payments.get(&order.id) else {
            dropped += 1;
            continue;
        };

        rows.push(TopOrderRow {
            order_id: order.id,
            customer_name: customer.name.clone(),
            order_date: order.order_date,
            total_amount,
            payment_method: payment.method,
        });
    }

    if dropped > 0 {
        // Data-completeness caveat: incomplete orders never reach the report.
        tracing::debug!(dropped, "orders excluded by inner-join semantics");
    }

    rows.sort_by(|a, b| {
        b.total_amount
            .cmp(&a.total_amount)
            .then(a.order_id.cmp(&b.order_id))
    });
    rows.truncate(limit);

    Ok(rows)
}
