//! # Inbound Ports (Driving Actors)
//!
//! Operations the application exposes to the units that drive it.
//!
//! Catalog entries never hold the cart. They are handed a [`cart_router::CartRouter`]
//! at construction and raise their "add to cart" action through it.
pub mod cart_router;
