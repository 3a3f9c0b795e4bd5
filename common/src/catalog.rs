//! # Catalog Models
//!
//! * [`product::Product`]: an immutable purchasable item.
//! * [`product::format_amount`]: the single place prices turn into display text.

pub mod product;
