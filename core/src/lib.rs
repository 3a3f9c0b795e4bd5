//! # Shopfront Core
//!
//! The catalog-and-cart component tree, organized the hexagonal way.
//!
//! * **[`components`]**: renderable units (catalog, entries, cart) and their composition.
//!     * *Center of the Hexagon*.
//! * **[`cart_store`]**: the cart's item collection and its change notifications.
//! * **[`application`]**: the coordinator that boots the shop and routes products into the cart.
//! * **[`ports`]**: traits isolating the core from the host surface and the data source.
//!     * *Boundaries of the Hexagon*.
//! * **[`adapters`]**: concrete implementations of the outbound ports.
//!     * *Outside the Hexagon*.

pub mod adapters;
pub mod application;
pub mod cart_store;
pub mod components;
pub mod ports;
