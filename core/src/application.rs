//! # Application Layer
//!
//! Boots the shop and owns the one path from catalog entries into the cart.
//!
//! * [`coordinator::AppCoordinator`]: holds the cart and implements the
//!   [`crate::ports::inbound::cart_router::CartRouter`] port.
//! * [`coordinator::Application`]: the startup entry point, bundling the
//!   coordinator with the shop it built.

pub mod coordinator;
