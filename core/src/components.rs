//! # Components
//!
//! Renderable units and how they compose.
//!
//! ## Composition
//! * [`shop::ShopComposite`] owns one [`cart_view::CartView`] and one [`catalog_list::CatalogList`].
//! * [`catalog_list::CatalogList`] owns one [`product_entry::ProductEntry`] per product.
//!
//! ## Control Flow
//! An entry's "Add to Cart" button raises the product through its
//! [`crate::ports::inbound::cart_router::CartRouter`]; the cart re-renders its
//! total when it is told its items changed.
//!
//! Every unit holds a [`render_unit::RenderUnit`] and implements
//! [`render_unit::Renderable`] on top of it.

pub mod cart_view;
pub mod catalog_list;
pub mod product_entry;
pub mod render_unit;
pub mod shop;
