/// Knobs for the synthetic dataset generator.
///
/// Defaults match the sandbox corpus: 100 customers, 50 products, 300
/// orders, at most 5 line items per order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub max_items_per_order: usize,
    /// RNG seed. Same seed, config, and reference time produce an identical
    /// dataset.
    pub seed: u64,
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers: 100,
            products: 50,
            orders: 300,
            max_items_per_order: 5,
            seed: 0,
        }
    }
}
