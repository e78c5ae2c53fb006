//! Cross-crate flow: generate a dataset, validate it, run the report.

use chrono::{TimeZone, Utc};

use orderlens_datagen::{generate_at, GeneratorConfig};
use orderlens_report::{top_orders, DEFAULT_LIMIT};

fn anchor() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn generated_dataset_reports_cleanly() {
    let dataset = generate_at(&GeneratorConfig::with_seed(7), anchor());
    dataset.validate().unwrap();

    let rows = top_orders(&dataset, DEFAULT_LIMIT).unwrap();

    // 300 generated orders all qualify, so the report is full.
    assert_eq!(rows.len(), DEFAULT_LIMIT);

    for pair in rows.windows(2) {
        assert!(pair[1].total_amount <= pair[0].total_amount);
    }

    // Reported totals match a recomputation straight off the relations.
    for row in &rows {
        let expected: u64 = dataset
            .order_items
            .iter()
            .filter(|item| item.order_id == row.order_id)
            .map(|item| u64::from(item.quantity) * item.unit_price.minor())
            .sum();
        assert_eq!(row.total_amount.minor(), expected);
    }
}

#[test]
fn report_is_idempotent_over_unchanged_input() {
    let dataset = generate_at(&GeneratorConfig::with_seed(21), anchor());
    let first = top_orders(&dataset, DEFAULT_LIMIT).unwrap();
    let second = top_orders(&dataset, DEFAULT_LIMIT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn raising_the_limit_only_extends_the_ranking() {
    let dataset = generate_at(&GeneratorConfig::with_seed(3), anchor());
    let top20 = top_orders(&dataset, DEFAULT_LIMIT).unwrap();
    let top50 = top_orders(&dataset, 50).unwrap();
    assert_eq!(&top50[..DEFAULT_LIMIT], &top20[..]);
    assert_eq!(top50.len(), 50);
}
