//! `orderlens-datagen` — seeded synthetic dataset generator.
//!
//! Produces datasets with the same shape and distributions as the sandbox
//! corpus the report was built against: weighted order statuses, one to five
//! line items per order, quantities one to three, and one payment per order
//! whose amount equals the order's item total.

pub mod config;
pub mod generator;

pub use config::GeneratorConfig;
pub use generator::{generate, generate_at};
