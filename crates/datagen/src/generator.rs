//! Dataset generation.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use orderlens_core::{CustomerId, Money, OrderId, OrderItemId, PaymentId, ProductId};
use orderlens_model::{
    Customer, Dataset, Order, OrderItem, OrderStatus, Payment, PaymentMethod, Product,
    ProductCategory,
};

use crate::config::GeneratorConfig;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carmen", "Derek", "Elena", "Farid", "Greta", "Hugo", "Ines", "Jonas",
    "Katya", "Liam", "Maren", "Nadia", "Oscar", "Priya", "Quentin", "Rosa", "Stefan", "Tessa",
];

const LAST_NAMES: &[&str] = &[
    "Andersson", "Baker", "Costa", "Dawson", "Eriksen", "Fuentes", "Gallo", "Hoffmann", "Ivanov",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Novak", "Okafor", "Petrov", "Quispe", "Rossi",
    "Svensson", "Tanaka",
];

const COUNTRIES: &[&str] = &[
    "Norway", "Germany", "Spain", "Japan", "Brazil", "Canada", "Poland", "Kenya", "France",
    "Australia", "Mexico", "India",
];

const PRODUCT_WORDS: &[&str] = &[
    "Alpine", "Breeze", "Cobalt", "Drift", "Ember", "Fable", "Granite", "Harbor", "Indigo",
    "Juniper", "Kestrel", "Lumen", "Meadow", "Nimbus", "Onyx", "Pioneer",
];

/// Generate a dataset anchored at the current wall-clock time.
pub fn generate(config: &GeneratorConfig) -> Dataset {
    generate_at(config, Utc::now())
}

/// Generate a dataset anchored at `now`.
///
/// Fully deterministic: the same config (including seed) and the same `now`
/// produce an identical dataset.
pub fn generate_at(config: &GeneratorConfig, now: DateTime<Utc>) -> Dataset {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let customers = generate_customers(&mut rng, config.customers, now);
    let products = generate_products(&mut rng, config.products);
    let orders = generate_orders(&mut rng, config.orders, &customers, now);
    let order_items = generate_order_items(&mut rng, &orders, &products, config.max_items_per_order);
    let payments = generate_payments(&mut rng, &orders, &order_items);

    Dataset {
        customers,
        products,
        orders,
        order_items,
        payments,
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn generate_customers(rng: &mut StdRng, count: usize, now: DateTime<Utc>) -> Vec<Customer> {
    (1..=count)
        .map(|idx| {
            let first = pick(rng, FIRST_NAMES);
            let last = pick(rng, LAST_NAMES);
            // Index suffix keeps emails unique across repeated name draws.
            let email = format!(
                "{}.{}{}@example.com",
                first.to_lowercase(),
                last.to_lowercase(),
                idx
            );
            let age = Duration::seconds(rng.gen_range(0..=730 * 24 * 3600));
            Customer {
                id: CustomerId::new(idx as u64),
                name: format!("{first} {last}"),
                email,
                country: Some(pick(rng, COUNTRIES).to_string()),
                created_at: now - age,
            }
        })
        .collect()
}

fn generate_products(rng: &mut StdRng, count: usize) -> Vec<Product> {
    (1..=count)
        .map(|idx| {
            let category = ProductCategory::ALL[rng.gen_range(0..ProductCategory::ALL.len())];
            Product {
                id: ProductId::new(idx as u64),
                name: format!("{} {}", pick(rng, PRODUCT_WORDS), category.singular()),
                category,
                // 5.00 to 500.00
                unit_price: Money::from_minor(rng.gen_range(500..=50_000)),
            }
        })
        .collect()
}

fn pick_status(rng: &mut StdRng) -> OrderStatus {
    // Weights: pending .15, processing .20, shipped .25, delivered .35,
    // cancelled .05.
    match rng.gen_range(0..100u32) {
        0..=14 => OrderStatus::Pending,
        15..=34 => OrderStatus::Processing,
        35..=59 => OrderStatus::Shipped,
        60..=94 => OrderStatus::Delivered,
        _ => OrderStatus::Cancelled,
    }
}

fn generate_orders(
    rng: &mut StdRng,
    count: usize,
    customers: &[Customer],
    now: DateTime<Utc>,
) -> Vec<Order> {
    if customers.is_empty() {
        return Vec::new();
    }

    (1..=count)
        .map(|idx| {
            let customer = &customers[rng.gen_range(0..customers.len())];
            Order {
                id: OrderId::new(idx as u64),
                customer_id: customer.id,
                order_date: now - Duration::days(rng.gen_range(0..=365)),
                status: pick_status(rng),
            }
        })
        .collect()
}

fn generate_order_items(
    rng: &mut StdRng,
    orders: &[Order],
    products: &[Product],
    max_items_per_order: usize,
) -> Vec<OrderItem> {
    if products.is_empty() || max_items_per_order == 0 {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut next_id = 1u64;
    for order in orders {
        let num_items = rng.gen_range(1..=max_items_per_order);
        for product in products.choose_multiple(rng, num_items) {
            items.push(OrderItem {
                id: OrderItemId::new(next_id),
                order_id: order.id,
                product_id: product.id,
                quantity: rng.gen_range(1..=3),
                unit_price: product.unit_price,
            });
            next_id += 1;
        }
    }
    items
}

fn generate_payments(rng: &mut StdRng, orders: &[Order], items: &[OrderItem]) -> Vec<Payment> {
    let mut totals: HashMap<OrderId, u64> = HashMap::with_capacity(orders.len());
    for item in items {
        *totals.entry(item.order_id).or_insert(0) +=
            u64::from(item.quantity) * item.unit_price.minor();
    }

    let mut payments = Vec::new();
    let mut next_id = 1u64;
    for order in orders {
        let total = totals.get(&order.id).copied().unwrap_or(0);
        // Orders that never accrued value get no payment row; the report's
        // inner join drops them.
        if total == 0 {
            continue;
        }
        payments.push(Payment {
            id: PaymentId::new(next_id),
            order_id: order.id,
            amount: Money::from_minor(total),
            method: PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())],
            paid_at: order.order_date + Duration::days(rng.gen_range(0..=5)),
        });
        next_id += 1;
    }
    payments
}
