//! # Shopfront Common
//!
//! Value types shared by every crate in the workspace.
//!
//! * **[`catalog`]**: the `Product` record and price formatting.
//! * **[`dom`]**: node handles and the typed markup tree components render.
//! * **[`config`]**: runtime configuration built by the binary.
//! * **[`error`]**: the error taxonomy of the shop.

pub mod catalog;
pub mod config;
pub mod dom;
pub mod error;
