use crate::error::ShopError;

/// A purchasable item as produced by a product source.
///
/// Products are never mutated after creation. Entries and the cart hold
/// their own clones of the same record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub title: String,
    pub image: String,
    pub price: f64,
    pub description: String,
}

impl Product {
    /// Builds a product, rejecting prices that are negative or not finite.
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Result<Self, ShopError> {
        let title: String = title.into();
        if !price.is_finite() || price < 0.0 {
            return Err(ShopError::InvalidPrice { title, price });
        }

        Ok(Self {
            title,
            image: image.into(),
            price,
            description: description.into(),
        })
    }
}

/// Sum of `price` over `products`, accumulated in collection order.
pub fn total_price(products: &[Product]) -> f64 {
    products.iter().fold(0.0, |sum, product| sum + product.price)
}

/// Formats an amount the way the cart total displays it: `€ 118.70`.
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{currency} {amount:.2}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
