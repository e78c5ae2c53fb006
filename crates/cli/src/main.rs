//! `orderlens` — generate, inspect, and report over order datasets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use orderlens_datagen::GeneratorConfig;
use orderlens_model::Dataset;
use orderlens_report::{top_orders, DEFAULT_LIMIT};

#[derive(Parser)]
#[command(name = "orderlens", version, about = "Order revenue analytics over JSON datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a synthetic dataset and write it as JSON.
    Generate {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        customers: usize,
        #[arg(long, default_value_t = 50)]
        products: usize,
        #[arg(long, default_value_t = 300)]
        orders: usize,
        /// Output path for the dataset JSON file.
        #[arg(long)]
        out: PathBuf,
    },
    /// Print per-relation row counts for a dataset.
    Summary {
        #[arg(long)]
        data: PathBuf,
    },
    /// Rank orders by total line-item value and print the top rows.
    Report {
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    orderlens_observability::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            seed,
            customers,
            products,
            orders,
            out,
        } => generate(seed, customers, products, orders, &out),
        Command::Summary { data } => summary(&data),
        Command::Report { data, limit } => report(&data, limit),
    }
}

fn generate(seed: u64, customers: usize, products: usize, orders: usize, out: &Path) -> Result<()> {
    let config = GeneratorConfig {
        customers,
        products,
        orders,
        seed,
        ..GeneratorConfig::default()
    };
    let dataset = orderlens_datagen::generate(&config);

    let json = serde_json::to_string_pretty(&dataset).context("serializing dataset")?;
    fs::write(out, json).with_context(|| format!("writing dataset {}", out.display()))?;

    let counts = dataset.summary();
    tracing::info!(
        customers = counts.customers,
        products = counts.products,
        orders = counts.orders,
        order_items = counts.order_items,
        payments = counts.payments,
        "dataset generated"
    );
    println!("wrote {}", out.display());
    Ok(())
}

fn summary(data: &Path) -> Result<()> {
    let dataset = load_dataset(data)?;
    let counts = dataset.summary();
    println!("customers:   {}", counts.customers);
    println!("products:    {}", counts.products);
    println!("orders:      {}", counts.orders);
    println!("order_items: {}", counts.order_items);
    println!("payments:    {}", counts.payments);
    Ok(())
}

fn report(data: &Path, limit: usize) -> Result<()> {
    let dataset = load_dataset(data)?;
    let rows = top_orders(&dataset, limit)?;

    println!(
        "{:>4}  {:>8}  {:<24}  {:<19}  {:>12}  {}",
        "rank", "order", "customer", "date", "total", "method"
    );
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "{:>4}  {:>8}  {:<24}  {:<19}  {:>12}  {}",
            rank + 1,
            row.order_id,
            row.customer_name,
            row.order_date.format("%Y-%m-%d %H:%M:%S"),
            row.total_amount,
            row.payment_method
        );
    }
    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    dataset
        .validate()
        .with_context(|| format!("dataset {} failed integrity validation", path.display()))?;
    Ok(dataset)
}
