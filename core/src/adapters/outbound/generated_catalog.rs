use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shopfront_common::catalog::product::Product;
use shopfront_common::error::ShopError;
use tracing::debug;

use crate::ports::outbound::product_source::ProductSource;

const MIN_PRICE_CENTS: u32 = 100;
const MAX_PRICE_CENTS: u32 = 15_000;

/// Mock catalog of `count` products with random whole-cent prices.
///
/// A seeded catalog yields the same products on every fetch.
pub struct GeneratedCatalog {
    count: usize,
    seed: Option<u64>,
}

impl GeneratedCatalog {
    pub fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl ProductSource for GeneratedCatalog {
    fn fetch_products(&self) -> Result<Vec<Product>, ShopError> {
        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let products = (1..=self.count)
            .map(|n| {
                let cents: u32 = rng.random_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS);
                Product::new(
                    format!("A Product {n}"),
                    format!("https://dummyimage.com/800x320/a89fa8/540075&text=A+Product+Image+{n}"),
                    f64::from(cents) / 100.0,
                    format!("Description of Product {n}"),
                )
            })
            .collect::<Result<Vec<Product>, ShopError>>()?;

        debug!(count = products.len(), seed = ?self.seed, "generated catalog");
        Ok(products)
    }
}
