//! `orderlens-model` — the e-commerce records the report reads.
//!
//! Entities are plain serde-friendly records: the data is externally owned
//! and arrives already materialized, so validation is centralized in
//! [`Dataset::validate`] rather than scattered across constructors.

pub mod customer;
pub mod dataset;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;

pub use customer::Customer;
pub use dataset::{Dataset, DatasetSummary};
pub use order::{Order, OrderStatus};
pub use order_item::OrderItem;
pub use payment::{Payment, PaymentMethod};
pub use product::{Product, ProductCategory};
