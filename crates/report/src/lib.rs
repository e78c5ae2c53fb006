//! `orderlens-report` — the top-orders revenue report.

pub mod top_orders;

pub use top_orders::{top_orders, TopOrderRow, DEFAULT_LIMIT};
