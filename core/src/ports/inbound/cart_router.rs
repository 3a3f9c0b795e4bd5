use shopfront_common::catalog::product::Product;
use shopfront_common::error::ShopError;

/// Routes a product into whichever cart the application currently owns.
pub trait CartRouter {
    fn route_to_cart(&self, product: Product) -> Result<(), ShopError>;
}
