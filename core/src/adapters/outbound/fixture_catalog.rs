use shopfront_common::catalog::product::Product;
use shopfront_common::error::ShopError;
use tracing::debug;

use crate::ports::outbound::product_source::ProductSource;

/// The hard-coded catalog standing in for a network fetch.
pub struct FixtureCatalog;

impl ProductSource for FixtureCatalog {
    fn fetch_products(&self) -> Result<Vec<Product>, ShopError> {
        let products = vec![
            Product::new(
                "A Product 1",
                "https://dummyimage.com/800x320/a89fa8/540075&text=A+Product+Image+1",
                34.95,
                "Description of Product 1",
            )?,
            Product::new(
                "A Product 2",
                "https://dummyimage.com/800x320/a89fa8/540075&text=A+Product+Image+2",
                83.75,
                "Description of Product 2",
            )?,
        ];
        debug!(count = products.len(), "loaded fixture catalog");
        Ok(products)
    }
}
