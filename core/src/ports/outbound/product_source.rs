use shopfront_common::catalog::product::Product;
use shopfront_common::error::ShopError;

/// Produces the products the catalog displays.
///
/// Called synchronously, once, while the catalog is being built.
pub trait ProductSource {
    fn fetch_products(&self) -> Result<Vec<Product>, ShopError>;
}
