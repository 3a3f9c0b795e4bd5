//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`].
//!
//! * **[`outbound`]** (Driven): the in-memory host document and the product sources.
//!
//! Inbound adapters (the command line) live in the `shopfront-cli` crate and
//! call [`crate::application`] directly.

pub mod outbound;
